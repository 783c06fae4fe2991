use clap::{Parser, ValueHint};
use mtg_rdf::config::{ALL_PRINTINGS_URL, DATA_DIR, META_URL};
use mtg_rdf::pipeline::Stages;
use mtg_rdf::Url;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "mtg-rdf")]
/// Converts MTGJSON card data into an RDF graph serialized as Turtle
///
/// Without a stage flag, the data is extracted and transformed.
pub struct Args {
    /// Run the ingest process (extract, then transform)
    #[arg(long)]
    pub ingest: bool,
    /// Download and unpack AllPrintings.json
    #[arg(long)]
    pub extract: bool,
    /// Convert an existing AllPrintings.json into Turtle
    #[arg(long)]
    pub transform: bool,
    /// Directory for the downloaded and generated files
    #[arg(long, default_value = DATA_DIR, value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,
    /// URL of AllPrintings.json
    ///
    /// `.bz2` and `.gz` archives are unpacked. `file://` URLs are read from the file system.
    #[arg(long, default_value = ALL_PRINTINGS_URL, value_hint = ValueHint::Url)]
    pub source_url: Url,
    /// URL of Meta.json, used to check whether the local data is up to date
    #[arg(long, default_value = META_URL, value_hint = ValueHint::Url)]
    pub meta_url: Url,
    /// The JSON file to write (extract) and read (transform)
    ///
    /// By default `AllPrintings.json` in the data directory.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
    /// The Turtle file to write
    ///
    /// By default `mtg-rdf.ttl` in the data directory.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// Download the data even if the local copy is up to date
    #[arg(long)]
    pub force: bool,
}

impl Args {
    /// Returns the selected stages. Both stages run if none is selected.
    pub fn stages(&self) -> Stages {
        let stages = Stages {
            extract: self.ingest || self.extract,
            transform: self.ingest || self.transform,
        };
        if stages.is_empty() {
            Stages::ALL
        } else {
            stages
        }
    }
}
