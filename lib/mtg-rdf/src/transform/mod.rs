//! Maps MTGJSON card printings onto the MTG ontology.

mod graph;

pub use graph::*;

use crate::config::TransformConfig;
use crate::files::{close_file_writer, create_parent_dir, partial_path};
use crate::model::AllPrintings;
use crate::MtgRdfError;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts what a transformation did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// The number of sets in the input.
    pub sets: usize,
    /// The number of card printings that have been converted.
    pub cards: usize,
    /// The number of card printings that have been skipped.
    pub skipped: usize,
    /// The number of triples in the output.
    pub triples: usize,
}

/// Converts an `AllPrintings.json` file into a Turtle file.
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Runs the transformation.
    ///
    /// The input is parsed completely before the output is touched. The output file is replaced
    /// only once the whole graph has been written.
    pub fn transform(&self) -> Result<TransformStats, MtgRdfError> {
        info!("Loading '{}' ...", self.config.input.display());
        let document = load_all_printings(&self.config.input)?;

        info!(
            "Converting {} card printings in {} sets to RDF ...",
            document.card_count(),
            document.sets.len()
        );
        let (graph, stats) = build_graph(&document);
        drop(document);
        info!(
            "Conversion completed: {} cards, {} skipped, {} triples.",
            stats.cards, stats.skipped, stats.triples
        );

        info!("Serializing to '{}' ...", self.config.output.display());
        write_turtle_file(&graph, &self.config.output)?;
        info!("RDF data serialized successfully.");
        Ok(stats)
    }
}

/// Parses an `AllPrintings.json` file.
pub fn load_all_printings(path: &Path) -> Result<AllPrintings, MtgRdfError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MtgRdfError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => MtgRdfError::io("open", path, e),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| MtgRdfError::Parse {
        location: path.display().to_string(),
        source,
    })
}

/// Converts every card printing in `document` into triples.
///
/// Sets are visited in the order of their set code and cards in the order of the input. Cards that
/// cannot be converted are logged and skipped.
pub fn build_graph(document: &AllPrintings) -> (CardGraph, TransformStats) {
    let mut graph = CardGraph::new();
    let mut stats = TransformStats::default();

    for (set_code, set) in &document.sets {
        debug!("Converting set '{set_code}' ({} cards)", set.cards.len());
        stats.sets += 1;
        for card in &set.cards {
            match graph.add_card(set_code, set, card) {
                Ok(()) => stats.cards += 1,
                Err(error) => {
                    warn!("Skipping card: {error}");
                    stats.skipped += 1;
                }
            }
        }
    }

    stats.triples = graph.len();
    (graph, stats)
}

/// Writes `graph` as Turtle to `path`.
///
/// The graph is written to a sibling `.partial` file first, which then replaces `path`. A failure
/// leaves an existing file at `path` untouched.
pub fn write_turtle_file(graph: &CardGraph, path: &Path) -> Result<(), MtgRdfError> {
    create_parent_dir(path)?;
    let partial = partial_path(path);

    let written = File::create(&partial)
        .and_then(|file| graph.write_turtle(BufWriter::new(file)))
        .and_then(close_file_writer);
    if let Err(e) = written {
        fs::remove_file(&partial).ok();
        return Err(MtgRdfError::io("write", partial, e));
    }

    fs::rename(&partial, path).map_err(|e| MtgRdfError::io("replace", path, e))
}
