use crate::extract::Compression;
use oxrdf::IriParseError;
use reqwest::{StatusCode, Url};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal error of the extraction or the transformation.
#[derive(Debug, Error)]
pub enum MtgRdfError {
    #[error("Could not send request to download '{url}'")]
    Download {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Response code for '{url}' was not OK. Actual: {status}")]
    HttpStatus { url: Url, status: StatusCode },
    #[error("Could not {action} '{}'", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not unpack the {compression} payload into '{}'", path.display())]
    Decompress {
        compression: Compression,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not parse the JSON document '{location}'")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Input file '{}' does not exist", path.display())]
    MissingInput { path: PathBuf },
}

impl MtgRdfError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// A problem with a single card printing. The printing is skipped and the conversion continues.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Card '{name}' in set '{set_code}' has no uuid")]
    MissingUuid { set_code: String, name: String },
    #[error("Card '{uuid}' in set '{set_code}' was already converted")]
    DuplicateUuid { set_code: String, uuid: String },
    #[error("Cannot mint an IRI for '{value}' in set '{set_code}'")]
    InvalidIri {
        set_code: String,
        value: String,
        #[source]
        source: IriParseError,
    },
}
