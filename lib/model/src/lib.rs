mod card;
mod document;
mod meta;
mod lenient;
pub mod vocab;

pub use card::*;
pub use document::*;
pub use meta::*;

// Re-export some oxrdf types.
pub use oxrdf::{Literal, LiteralRef, NamedNode, NamedNodeRef, Triple, TripleRef};
