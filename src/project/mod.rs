//! Project module - descriptor and endpoint map of a scaffolded API project
//!
//! `papi.config.json` records which framework and version the project was
//! generated for. `papi.paths.json` maps each endpoint path to its declared
//! HTTP method and is what `papi test` walks.
//!
//! # Example
//!
//! ```no_run
//! use papi::project;
//! use std::path::Path;
//!
//! let endpoints = project::load_endpoints(Path::new("."))?;
//! for endpoint in endpoints.iter() {
//!     println!("{} ({})", endpoint.path, endpoint.method());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

pub use internal::{Endpoint, EndpointMap, ProjectConfig};

/// Load the endpoint map from `<root>/papi.paths.json`
///
/// Fails if the file is missing, is not a JSON object of string to string,
/// or contains a path that does not start with '/'.
pub fn load_endpoints(root: &Path) -> Result<EndpointMap> {
    internal::load_endpoints(root)
}

/// Parse endpoint map JSON from a string
pub fn parse_endpoints(content: &str) -> Result<EndpointMap> {
    internal::parse_endpoints(content)
}
