// # Router Locations
//
// Fetches routers, the locations hosting them and the links between routers,
// then reports which locations are directly connected to which.
//
// fetch (`api` / `source`) -> build (`connections`) -> report (`report`).
// The HTTP side is behind the `reqwest` feature; with it disabled the crate
// still analyzes local JSON files.

#[cfg(feature = "reqwest")]
pub mod client;

/// Client for the router/location API. Enabled with the `reqwest` feature.
#[cfg(feature = "reqwest")]
pub mod api;

pub mod analyzer;
pub mod connections;
pub mod error;
pub mod report;
pub mod source;
pub mod types;

pub use analyzer::{analyze, run};
pub use connections::{ConnectionBuilder, ConnectionMap};
pub use error::AnalyzerError;
pub use types::{Dataset, Location, Router};
