use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::client::BLOCKING_CLIENT;
use crate::error::{AnalyzerError, Result};
use crate::types::Dataset;

/// The router/location dataset. Fixed; there is no runtime override.
pub const API_URL: &str = "https://my-json-server.typicode.com/marcuzh/router_location_test_api/db";

/// GET the dataset from [`API_URL`] with the shared client.
pub fn fetch() -> Result<Dataset> {
    fetch_from(&*BLOCKING_CLIENT, API_URL)
}

/// Single attempt, no retries. Non-2xx, timeouts and undecodable bodies all fail the call.
pub fn fetch_from(client: &Client, url: &str) -> Result<Dataset> {
    debug!(url, "fetching dataset");
    let res = client.get(url).send().map_err(transport_error)?;

    let status = res.status();
    if !status.is_success() {
        return Err(AnalyzerError::HttpStatus(status.as_u16()));
    }

    let body = res.text().map_err(transport_error)?;
    let data = Dataset::from_json(&body)?;
    info!(
        routers = data.routers.len(),
        locations = data.locations.len(),
        "fetched dataset"
    );
    Ok(data)
}

fn transport_error(e: reqwest::Error) -> AnalyzerError {
    if e.is_timeout() {
        AnalyzerError::Timeout(e.to_string())
    } else {
        AnalyzerError::Request(e)
    }
}
