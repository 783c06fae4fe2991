use crate::lenient::deserialize_null_default;
use crate::{CardRecord, MetaInfo};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

/// A set (edition) together with all of its card printings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub code: Option<String>,
    pub name: Option<String>,
    /// The kind of the set (e.g., `expansion`, `core`, `promo`).
    #[serde(rename = "type")]
    pub set_type: Option<String>,
    /// The release date as `YYYY-MM-DD`.
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub cards: Vec<CardRecord>,
}

/// The parsed contents of an `AllPrintings.json` file.
///
/// Two shapes are accepted:
/// - the MTGJSON envelope `{"meta": {..}, "data": {"<SET>": {..}}}`, and
/// - a bare mapping `{"<SET>": {..}}` from set code to set.
///
/// The sets are kept ordered by their set code such that every traversal is deterministic,
/// regardless of the key order in the source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllPrintings {
    /// The release information, if the file uses the envelope.
    pub meta: Option<MetaInfo>,
    /// All sets, keyed by set code.
    pub sets: BTreeMap<String, SetRecord>,
}

impl AllPrintings {
    /// Returns the total number of card printings over all sets.
    pub fn card_count(&self) -> usize {
        self.sets.values().map(|set| set.cards.len()).sum()
    }
}

impl<'de> Deserialize<'de> for AllPrintings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AllPrintingsVisitor)
    }
}

struct AllPrintingsVisitor;

impl<'de> Visitor<'de> for AllPrintingsVisitor {
    type Value = AllPrintings;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an MTGJSON AllPrintings document or a map from set code to set")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut meta = None;
        let mut data: Option<BTreeMap<String, SetRecord>> = None;
        let mut bare = BTreeMap::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "meta" => meta = Some(map.next_value::<MetaInfo>()?),
                "data" => {
                    if data.is_some() {
                        return Err(de::Error::duplicate_field("data"));
                    }
                    data = Some(map.next_value()?);
                }
                _ => {
                    let set = map.next_value::<SetRecord>()?;
                    bare.insert(key, set);
                }
            }
        }

        let sets = match data {
            Some(_) if !bare.is_empty() => {
                let key = bare.keys().next().map(String::as_str).unwrap_or_default();
                return Err(de::Error::custom(format!(
                    "unexpected set '{key}' next to the 'data' entry"
                )));
            }
            Some(data) => data,
            None => bare,
        };

        Ok(AllPrintings { meta, sets })
    }
}
