use reqwest::Url;
use std::path::{Path, PathBuf};

/// The compressed MTGJSON dump of every card printing.
pub const ALL_PRINTINGS_URL: &str = "https://mtgjson.com/api/v5/AllPrintings.json.bz2";
/// The release information of the current MTGJSON build.
pub const META_URL: &str = "https://mtgjson.com/api/v5/Meta.json";

/// The directory that holds the downloaded and the generated files.
pub const DATA_DIR: &str = "data";
pub const ALL_PRINTINGS_FILE: &str = "AllPrintings.json";
pub const META_FILE: &str = "Meta.json";
pub const RDF_FILE: &str = "mtg-rdf.ttl";

/// Holds the configuration of a pipeline run.
///
/// Every path that is not set explicitly is resolved against [Self::data_dir].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// The directory for downloaded and generated files.
    pub data_dir: PathBuf,
    /// The URL of the (possibly compressed) `AllPrintings.json`.
    pub source_url: Url,
    /// The URL of `Meta.json`.
    pub meta_url: Url,
    /// The JSON file written by the extraction and read by the transformation.
    pub input: Option<PathBuf>,
    /// The Turtle file written by the transformation.
    pub output: Option<PathBuf>,
    /// Whether the extraction downloads the data even if the local copy is up to date.
    pub force: bool,
}

impl PipelineConfig {
    /// Creates a configuration that uses the default MTGJSON URLs and stores everything in
    /// `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            source_url: default_url(ALL_PRINTINGS_URL),
            meta_url: default_url(META_URL),
            input: None,
            output: None,
            force: false,
        }
    }

    /// Returns the path of the `AllPrintings.json` file.
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.data_dir.join(ALL_PRINTINGS_FILE))
    }

    /// Returns the path of the generated Turtle file.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_dir.join(RDF_FILE))
    }

    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            source_url: self.source_url.clone(),
            meta_url: self.meta_url.clone(),
            target: self.input_path(),
            meta_path: self.data_dir.join(META_FILE),
            force: self.force,
        }
    }

    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            input: self.input_path(),
            output: self.output_path(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DATA_DIR)
    }
}

/// Holds the configuration of the extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    /// The URL of the card data. The compression is derived from its extension.
    pub source_url: Url,
    /// The URL of the release information.
    pub meta_url: Url,
    /// The path of the decompressed JSON file. An existing file is overwritten.
    pub target: PathBuf,
    /// The path of the local copy of the release information.
    pub meta_path: PathBuf,
    /// Whether the freshness check is skipped.
    pub force: bool,
}

/// Holds the configuration of the transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformConfig {
    /// The `AllPrintings.json` file.
    pub input: PathBuf,
    /// The Turtle file. An existing file is only replaced after the graph has been written
    /// completely.
    pub output: PathBuf,
}

impl TransformConfig {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }
}

#[allow(clippy::expect_used, reason = "The default URLs are constants")]
fn default_url(url: &str) -> Url {
    Url::parse(url).expect("Default URL should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_below_data_dir() {
        let config = PipelineConfig::new("/tmp/mtg");
        assert_eq!(config.input_path(), Path::new("/tmp/mtg/AllPrintings.json"));
        assert_eq!(config.output_path(), Path::new("/tmp/mtg/mtg-rdf.ttl"));
        assert_eq!(
            config.extract_config().meta_path,
            Path::new("/tmp/mtg/Meta.json")
        );
        assert_eq!(config.source_url.as_str(), ALL_PRINTINGS_URL);
        assert_eq!(config.meta_url.as_str(), META_URL);
    }

    #[test]
    fn explicit_paths_take_precedence() {
        let config = PipelineConfig {
            input: Some(PathBuf::from("cards.json")),
            output: Some(PathBuf::from("out/cards.ttl")),
            ..PipelineConfig::default()
        };
        let transform = config.transform_config();
        assert_eq!(transform.input, Path::new("cards.json"));
        assert_eq!(transform.output, Path::new("out/cards.ttl"));
        assert_eq!(config.extract_config().target, Path::new("cards.json"));
        assert_eq!(
            config.extract_config().meta_path,
            Path::new("data/Meta.json")
        );
    }
}
