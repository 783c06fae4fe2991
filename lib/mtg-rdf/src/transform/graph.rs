use crate::model::vocab::{mtgo, rdf, xsd};
use crate::model::{CardRecord, SetRecord};
use crate::RecordError;
use oxrdf::{IriParseError, Literal, NamedNode, NamedNodeRef, Term, Triple};
use oxrdfio::{RdfFormat, RdfSerializer};
use std::collections::HashSet;
use std::io::{self, Write};

/// The prefixes that are declared at the top of the Turtle output.
pub const PREFIXES: [(&str, &str); 3] = [
    (mtgo::PREFIX, mtgo::NAMESPACE),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// An append-only collection of the triples that describe card printings and their sets.
///
/// Triples are kept in insertion order and the triples of one subject are always adjacent. This
/// keeps the serialization deterministic and allows the Turtle serializer to group them. Set nodes
/// are only described once, the first time a card of the set is added.
#[derive(Debug, Default)]
pub struct CardGraph {
    triples: Vec<Triple>,
    sets: HashSet<String>,
    cards: HashSet<String>,
}

impl CardGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Returns the node of a card printing with the given MTGJSON uuid.
    pub fn card_node(uuid: &str) -> Result<NamedNode, IriParseError> {
        NamedNode::new(format!("{}card/{uuid}", mtgo::NAMESPACE))
    }

    /// Returns the node of the set with the given set code.
    pub fn set_node(set_code: &str) -> Result<NamedNode, IriParseError> {
        NamedNode::new(format!("{}set/{set_code}", mtgo::NAMESPACE))
    }

    /// Adds the description of `card`, a printing in the set `set_code`.
    ///
    /// Nothing is added if the printing cannot be identified. In this case, the returned
    /// [RecordError] explains why.
    pub fn add_card(
        &mut self,
        set_code: &str,
        set: &SetRecord,
        card: &CardRecord,
    ) -> Result<(), RecordError> {
        let Some(uuid) = card.stable_id() else {
            return Err(RecordError::MissingUuid {
                set_code: set_code.to_owned(),
                name: card.name.clone().unwrap_or_default(),
            });
        };
        let card_node = Self::card_node(uuid).map_err(invalid_iri(set_code, uuid))?;
        let set_node = Self::set_node(set_code).map_err(invalid_iri(set_code, set_code))?;
        if self.cards.contains(uuid) {
            return Err(RecordError::DuplicateUuid {
                set_code: set_code.to_owned(),
                uuid: uuid.to_owned(),
            });
        }

        if !self.sets.contains(set_code) {
            self.sets.insert(set_code.to_owned());
            self.push_set(set_code, set, set_node.clone());
        }
        self.cards.insert(uuid.to_owned());

        let mut triples = SubjectTriples::new(card_node);
        triples.push(rdf::TYPE, mtgo::CARD.into_owned());
        for class in card.types.iter().filter_map(|t| mtgo::card_type_class(t)) {
            triples.push(rdf::TYPE, class.into_owned());
        }

        triples.literal(mtgo::ID, Some(uuid));
        triples.literal(mtgo::NAME, card.name.as_deref());
        triples.literal(mtgo::ARTIST, card.artist.as_deref());

        triples.literal(mtgo::TYPE_LINE, card.type_line.as_deref());
        triples.literals(mtgo::CARD_TYPE, &card.types);
        triples.literals(mtgo::CARD_SUBTYPE, &card.subtypes);
        triples.literals(mtgo::CARD_SUPERTYPE, &card.supertypes);

        triples.literals(mtgo::COLOR, &card.colors);
        triples.literals(mtgo::COLOR_IDENTITY, &card.color_identity);
        triples.literal(mtgo::RARITY, card.rarity.as_deref());

        triples.literal(mtgo::MANA_COST, card.mana_cost.as_deref());
        if let Some(mana_value) = card.mana_value.filter(|v| v.is_finite()) {
            triples.push(
                mtgo::CONVERTED_MANA_COST,
                Literal::new_typed_literal(mana_value.to_string(), xsd::DECIMAL),
            );
        }

        triples.literal(mtgo::ORACLE_TEXT, card.text.as_deref());
        triples.literal(mtgo::RULES_TEXT, card.original_text.as_deref());
        triples.literal(mtgo::POWER, card.power.as_deref());
        triples.literal(mtgo::TOUGHNESS, card.toughness.as_deref());
        triples.literal(mtgo::LOYALTY, card.loyalty.as_deref());
        triples.literals(mtgo::ABILITY_KEYWORD, &card.keywords);

        triples.literal(
            mtgo::SET_CODE,
            Some(card.set_code.as_deref().unwrap_or(set_code)),
        );
        triples.push(mtgo::CARD_SET, set_node);
        triples.literal(mtgo::COLLECTOR_NUMBER, card.number.as_deref());
        for (source, id) in &card.identifiers {
            triples.push(
                mtgo::IDENTIFIER,
                Literal::new_simple_literal(format!("{source}:{id}")),
            );
        }

        self.triples.extend(triples.finish());
        Ok(())
    }

    fn push_set(&mut self, set_code: &str, set: &SetRecord, set_node: NamedNode) {
        let mut triples = SubjectTriples::new(set_node);
        triples.push(rdf::TYPE, mtgo::SET.into_owned());
        triples.literal(mtgo::SET_CODE, Some(set.code.as_deref().unwrap_or(set_code)));
        triples.literal(mtgo::NAME, set.name.as_deref());
        triples.literal(mtgo::SET_TYPE, set.set_type.as_deref());
        if let Some(release_date) = &set.release_date {
            triples.push(
                mtgo::RELEASE_DATE,
                Literal::new_typed_literal(release_date, xsd::DATE),
            );
        }
        self.triples.extend(triples.finish());
    }

    /// Serializes the graph as Turtle into `writer` and returns the writer.
    pub fn write_turtle<W: Write>(&self, writer: W) -> io::Result<W> {
        let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
        for (prefix, iri) in PREFIXES {
            serializer = serializer
                .with_prefix(prefix, iri)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        }

        let mut serializer = serializer.for_writer(writer);
        for triple in &self.triples {
            serializer.serialize_triple(triple)?;
        }
        serializer.finish()
    }
}

fn invalid_iri(set_code: &str, value: &str) -> impl FnOnce(IriParseError) -> RecordError {
    let set_code = set_code.to_owned();
    let value = value.to_owned();
    move |source| RecordError::InvalidIri {
        set_code,
        value,
        source,
    }
}

/// Collects the triples of a single subject, dropping exact duplicates.
struct SubjectTriples {
    subject: NamedNode,
    triples: Vec<Triple>,
}

impl SubjectTriples {
    fn new(subject: NamedNode) -> Self {
        Self {
            subject,
            triples: Vec::new(),
        }
    }

    fn push(&mut self, predicate: NamedNodeRef<'_>, object: impl Into<Term>) {
        let triple = Triple::new(self.subject.clone(), predicate, object);
        if !self.triples.contains(&triple) {
            self.triples.push(triple);
        }
    }

    fn literal(&mut self, predicate: NamedNodeRef<'_>, value: Option<&str>) {
        if let Some(value) = value {
            self.push(predicate, Literal::new_simple_literal(value));
        }
    }

    fn literals(&mut self, predicate: NamedNodeRef<'_>, values: &[String]) {
        for value in values {
            self.push(predicate, Literal::new_simple_literal(value));
        }
    }

    fn finish(self) -> Vec<Triple> {
        self.triples
    }
}
