use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AnalyzerError, Result};
use crate::types::Dataset;

/// Where a run gets its dataset from.
pub trait DatasetSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Dataset>;
}

/// The HTTP API. Defaults to [`crate::api::API_URL`] with the shared client.
#[cfg(feature = "reqwest")]
pub struct RemoteSource {
    client: Option<reqwest::blocking::Client>,
    url: String,
}

#[cfg(feature = "reqwest")]
impl Default for RemoteSource {
    fn default() -> Self {
        Self {
            client: None,
            url: crate::api::API_URL.to_string(),
        }
    }
}

#[cfg(feature = "reqwest")]
impl RemoteSource {
    pub fn with_client(client: reqwest::blocking::Client, url: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            url: url.into(),
        }
    }
}

#[cfg(feature = "reqwest")]
impl DatasetSource for RemoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Result<Dataset> {
        let client = self.client.as_ref().unwrap_or(&*crate::client::BLOCKING_CLIENT);
        crate::api::fetch_from(client, &self.url)
    }
}

/// A JSON file with the same shape as the API payload.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        debug!(path = %self.path.display(), "reading dataset");
        let s = std::fs::read_to_string(&self.path).map_err(|source| AnalyzerError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Dataset::from_json(&s)?)
    }
}
