use serde::Deserialize;

/// Describes the build of an MTGJSON data release.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MetaInfo {
    /// The release date of the data (e.g., `2024-06-01`).
    pub date: Option<String>,
    /// The MTGJSON version that produced the data.
    pub version: Option<String>,
}

/// The contents of MTGJSON's `Meta.json`.
///
/// The extraction compares the release date of the local and the remote copy to decide whether
/// the (large) card archive must be downloaded again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MetaDocument {
    pub data: MetaInfo,
}

impl MetaDocument {
    /// Returns true if both documents describe the same, dated release.
    pub fn is_same_release(&self, other: &MetaDocument) -> bool {
        match (&self.data.date, &other.data.date) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
