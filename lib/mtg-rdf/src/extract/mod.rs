//! Downloads the MTGJSON card data.

mod compression;
mod fetch;

pub use compression::*;
pub use fetch::*;

use crate::config::ExtractConfig;
use crate::files::{close_file_writer, create_parent_dir, partial_path};
use crate::model::MetaDocument;
use crate::MtgRdfError;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::{info, warn};

/// The result of a successful extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The local copy already contains the most recent release. Nothing was downloaded.
    UpToDate { date: String },
    /// A fresh copy was downloaded.
    Downloaded {
        /// The release date, if MTGJSON publishes one.
        date: Option<String>,
        /// The size of the decompressed JSON file.
        bytes: u64,
    },
}

/// Downloads `AllPrintings.json` and stores it, decompressed, in the local file system.
pub struct Extractor<F = UrlFetcher> {
    config: ExtractConfig,
    fetcher: F,
}

impl Extractor {
    /// Creates a new [Extractor] that fetches the data with a default [UrlFetcher].
    pub fn new(config: ExtractConfig) -> Self {
        Self::with_fetcher(config, UrlFetcher::default())
    }
}

impl<F: Fetcher> Extractor<F> {
    pub fn with_fetcher(config: ExtractConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Runs the extraction.
    ///
    /// The release information is fetched first. If the local copy of `Meta.json` describes the
    /// same release and the target file exists, the download is skipped unless
    /// [ExtractConfig::force] is set. Otherwise, the payload is downloaded, decompressed into the
    /// target file, and the release information is stored next to it.
    pub async fn extract(&self) -> Result<ExtractOutcome, MtgRdfError> {
        let config = &self.config;
        create_parent_dir(&config.target)?;
        create_parent_dir(&config.meta_path)?;

        info!("Fetching release information from '{}' ...", config.meta_url);
        let raw_meta = self.fetcher.fetch(&config.meta_url).await?;
        let remote_meta: MetaDocument =
            serde_json::from_slice(&raw_meta).map_err(|source| MtgRdfError::Parse {
                location: config.meta_url.to_string(),
                source,
            })?;

        if !config.force && config.target.exists() {
            if let Some(date) = read_local_meta(&config.meta_path)
                .filter(|local| local.is_same_release(&remote_meta))
                .and_then(|local| local.data.date)
            {
                info!("Local data from {date} is up to date. Skipping download.");
                return Ok(ExtractOutcome::UpToDate { date });
            }
        }

        let compression = Compression::from_url(&config.source_url);
        info!("Downloading '{}' ...", config.source_url);
        let payload = self.fetcher.fetch(&config.source_url).await?;

        info!(
            "Unpacking {compression} payload into '{}' ...",
            config.target.display()
        );
        let bytes = unpack_into(compression, &payload, &config.target)?;

        // Written last such that a failed download keeps an older release outdated.
        fs::write(&config.meta_path, &raw_meta)
            .map_err(|e| MtgRdfError::io("write", &config.meta_path, e))?;

        info!("Extraction done ({bytes} bytes).");
        Ok(ExtractOutcome::Downloaded {
            date: remote_meta.data.date,
            bytes,
        })
    }
}

/// Reads the local `Meta.json`. A missing or unreadable file counts as outdated.
fn read_local_meta(path: &Path) -> Option<MetaDocument> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Cannot read '{}', downloading again: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_slice(&content) {
        Ok(meta) => Some(meta),
        Err(e) => {
            warn!("Cannot parse '{}', downloading again: {e}", path.display());
            None
        }
    }
}

/// Decompresses `payload` into a sibling `.partial` file that replaces `target` once complete. A
/// failure leaves an existing file at `target` untouched.
fn unpack_into(
    compression: Compression,
    payload: &[u8],
    target: &Path,
) -> Result<u64, MtgRdfError> {
    let partial = partial_path(target);
    let result = unpack_file(compression, payload, &partial);
    if result.is_err() {
        fs::remove_file(&partial).ok();
    }
    let bytes = result?;
    fs::rename(&partial, target).map_err(|e| MtgRdfError::io("replace", target, e))?;
    Ok(bytes)
}

fn unpack_file(
    compression: Compression,
    payload: &[u8],
    path: &Path,
) -> Result<u64, MtgRdfError> {
    let file = File::create(path).map_err(|e| MtgRdfError::io("create", path, e))?;
    let mut writer = BufWriter::new(file);
    let bytes = compression
        .unpack(payload, &mut writer)
        .map_err(|source| MtgRdfError::Decompress {
            compression,
            path: path.to_path_buf(),
            source,
        })?;
    close_file_writer(writer).map_err(|e| MtgRdfError::io("write", path, e))?;
    Ok(bytes)
}
