//! Converts [MTGJSON](https://mtgjson.com) card data into an RDF graph serialized as Turtle.
//!
//! The conversion is a two-stage pipeline:
//! - the [Extractor](extract::Extractor) downloads and decompresses `AllPrintings.json`, and
//! - the [Transformer](transform::Transformer) maps every card printing onto the MTG ontology and
//!   writes the resulting graph as Turtle.

pub mod config;
mod error;
pub mod extract;
mod files;
pub mod pipeline;
pub mod transform;

pub use error::*;

pub use mtg_rdf_model as model;
pub use reqwest::Url;
