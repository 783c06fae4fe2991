use crate::MtgRdfError;
use async_trait::async_trait;
use reqwest::Url;
use std::fs;
use tracing::debug;

/// Retrieves the contents behind a URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the complete payload behind `url`.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, MtgRdfError>;
}

/// Fetches `http(s)` URLs with [reqwest] and reads `file` URLs from the local file system.
///
/// Local files make it possible to convert a dump that has been downloaded by other means.
#[derive(Clone, Debug, Default)]
pub struct UrlFetcher {
    client: reqwest::Client,
}

impl UrlFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for UrlFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, MtgRdfError> {
        if url.scheme() == "file" {
            let path = url.to_file_path().map_err(|()| {
                MtgRdfError::io(
                    "resolve",
                    url.path(),
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a local path"),
                )
            })?;
            debug!("Reading '{}' from the file system", path.display());
            return fs::read(&path).map_err(|e| MtgRdfError::io("read", path, e));
        }

        debug!("Requesting '{url}'");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| MtgRdfError::Download {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(MtgRdfError::HttpStatus {
                url: url.clone(),
                status: response.status(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| MtgRdfError::Download {
                url: url.clone(),
                source,
            })?;
        Ok(bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::NamedTempFile;

    #[tokio::test]
    async fn fetch_local_file() {
        let file = NamedTempFile::new("Meta.json").unwrap();
        file.write_str(r#"{"data": {"date": "2024-06-01"}}"#).unwrap();
        let url = Url::from_file_path(file.path()).unwrap();

        let payload = UrlFetcher::default().fetch(&url).await.unwrap();
        assert_eq!(payload, br#"{"data": {"date": "2024-06-01"}}"#);
    }

    #[tokio::test]
    async fn fetch_missing_local_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let url = Url::from_file_path(dir.path().join("missing.json")).unwrap();

        let error = UrlFetcher::default().fetch(&url).await.unwrap_err();
        assert!(matches!(error, MtgRdfError::Io { action: "read", .. }));
    }
}
