//! Data source resolution and raw byte retrieval.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};

use super::error::{ErrorContext, LoadError, LoadResult};

/// Public CSV of US flights (January 2015) used by the dashboard by default.
pub const DEFAULT_DATA_URL: &str = "https://gist.githubusercontent.com/florianeichin/cfa1705e12ebd75ff4c321427126ccee/raw/c86301a0e5d0c1757d325424b8deec04cc5c5ca9/flights_all_cleaned.csv";

/// Default timeout for fetching the CSV over HTTP.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the flights CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a source string: `http://` and `https://` prefixes select a URL,
    /// anything else is a filesystem path.
    pub fn parse(spec: &str) -> LoadResult<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(LoadError::configuration("Data source must not be empty"));
        }
        let lower = spec.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(spec.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(spec)))
        }
    }

    /// Read the full source into memory.
    pub async fn fetch(&self, timeout: Duration) -> LoadResult<Vec<u8>> {
        let bytes = match self {
            DataSource::File(path) => {
                debug!("Reading flights CSV from {}", path.display());
                tokio::fs::read(path)
                    .await
                    .map_err(|e| LoadError::from(e).with_source(self.to_string()))?
            }
            DataSource::Url(url) => {
                debug!("Fetching flights CSV from {}", url);
                let client = reqwest::Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|e| LoadError::from(e).with_source(self.to_string()))?;
                let response = client
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| LoadError::from(e).with_source(self.to_string()))?;
                response
                    .bytes()
                    .await
                    .map_err(|e| LoadError::from(e).with_source(self.to_string()))?
                    .to_vec()
            }
        };

        if bytes.is_empty() {
            return Err(LoadError::EmptyDataset {
                context: ErrorContext::new("fetch").with_source(self.to_string()),
            });
        }

        info!("Read {} bytes from {}", bytes.len(), self);
        Ok(bytes)
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "file:{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}
