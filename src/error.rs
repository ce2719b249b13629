use std::path::PathBuf;

use thiserror::Error;

use crate::types::{LocationId, RouterId};

/// Every way one analysis run can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Failed to fetch data from the API. HTTP status code: {0}")]
    HttpStatus(u16),

    #[error("Request to API timed out: {0}")]
    Timeout(String),

    #[cfg(feature = "reqwest")]
    #[error("Request to API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Router {router_id} references unknown location {location_id}")]
    UnknownLocation {
        router_id: RouterId,
        location_id: LocationId,
    },

    #[error("Router {router_id} links to unknown router {linked_id}")]
    UnknownRouter {
        router_id: RouterId,
        linked_id: RouterId,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
