use crate::lenient::{deserialize_lenient_string, deserialize_null_default};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A single printing of a card in a specific set, as published by MTGJSON.
///
/// Every attribute is optional on its own. MTGJSON omits attributes that do not apply to a
/// printing (e.g., `power` on an instant), and the transformation emits nothing for them.
/// Attributes that are not listed here are ignored while parsing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// The MTGJSON UUID. This is the stable identifier of the printing.
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub set_code: Option<String>,
    /// The full type line (e.g., `Legendary Creature — Goblin`).
    #[serde(rename = "type")]
    pub type_line: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub subtypes: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub supertypes: Vec<String>,
    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    /// The oracle text.
    pub text: Option<String>,
    /// The text as printed on the card.
    pub original_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub power: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub toughness: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub loyalty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub color_identity: Vec<String>,
    pub rarity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub keywords: Vec<String>,
    /// The collector number. Not necessarily numeric (e.g., `12a`).
    pub number: Option<String>,
    /// Identifiers of this printing in external databases, keyed by the database name
    /// (e.g., `scryfallId`).
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub identifiers: BTreeMap<String, String>,
}

impl CardRecord {
    /// Returns the stable identifier of this printing, if it has a usable one.
    pub fn stable_id(&self) -> Option<&str> {
        self.uuid.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}
