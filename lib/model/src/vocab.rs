//! Vocabularies used when converting MTGJSON data into RDF.

pub use oxrdf::vocab::{rdf, xsd};

/// The MTG ontology (`https://cmdoret.net/mtg_ontology/`).
pub mod mtgo {
    use oxrdf::NamedNodeRef;

    /// The preferred prefix of the namespace.
    pub const PREFIX: &str = "mtgo";
    /// The namespace IRI. Card and set nodes are minted below it.
    pub const NAMESPACE: &str = "https://cmdoret.net/mtg_ontology/";

    // Classes
    pub const CARD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Card");
    pub const SET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Set");
    pub const ARTIFACT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Artifact");
    pub const CREATURE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Creature");
    pub const ENCHANTMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Enchantment");
    pub const INSTANT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Instant");
    pub const LAND: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Land");
    pub const SORCERY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/Sorcery");

    // Card properties
    pub const ID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/id");
    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/name");
    pub const ARTIST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/artist");
    pub const TYPE_LINE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/type_line");
    pub const CARD_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/card_type");
    pub const CARD_SUBTYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/card_subtype");
    pub const CARD_SUPERTYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/card_supertype");
    pub const COLOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/color");
    pub const COLOR_IDENTITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/color_identity");
    pub const RARITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/rarity");
    pub const MANA_COST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/mana_cost");
    pub const CONVERTED_MANA_COST: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/converted_mana_cost");
    pub const ORACLE_TEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/oracle_text");
    pub const RULES_TEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/rules_text");
    pub const POWER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/power");
    pub const TOUGHNESS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/toughness");
    pub const LOYALTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/loyalty");
    pub const ABILITY_KEYWORD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/ability_keyword");
    pub const COLLECTOR_NUMBER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/collector_number");
    pub const IDENTIFIER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/identifier");
    pub const CARD_SET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/card_set");

    // Set properties. Sets reuse `name`.
    pub const SET_CODE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/set_code");
    pub const SET_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/set_type");
    pub const RELEASE_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://cmdoret.net/mtg_ontology/release_date");

    /// Returns the ontology class for an MTGJSON card type (e.g., `Creature`).
    ///
    /// Only the types that the ontology models as classes are mapped. Other types (e.g.,
    /// `Planeswalker`, `Battle`) are still asserted as `card_type` literals by the caller.
    pub fn card_type_class(card_type: &str) -> Option<NamedNodeRef<'static>> {
        match card_type {
            "Artifact" => Some(ARTIFACT),
            "Creature" => Some(CREATURE),
            "Enchantment" => Some(ENCHANTMENT),
            "Instant" => Some(INSTANT),
            "Land" => Some(LAND),
            "Sorcery" => Some(SORCERY),
            _ => None,
        }
    }
}
