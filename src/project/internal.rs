//! Internal implementation for project module
//!
//! Handles papi.config.json (descriptor) and papi.paths.json (endpoint map).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::paths;

// =============================================================================
// Descriptor
// =============================================================================

/// Project descriptor stored in papi.config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Framework the generated service is built on
    pub api: String,
    /// Semantic version of the generated service
    pub version: String,
}

// =============================================================================
// Endpoint Map
// =============================================================================

/// Mapping of URL path to declared HTTP method, read from papi.paths.json
///
/// Backed by a BTreeMap so iteration is lexicographic by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointMap(BTreeMap<String, String>);

/// One configured endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub path: &'a str,
    method: &'a str,
}

impl Endpoint<'_> {
    /// Declared method, upper-cased for display
    pub fn method(&self) -> String {
        self.method.trim().to_uppercase()
    }

    /// Whether the declared method matches the GET that is actually sent
    pub fn declares_get(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case("GET")
    }
}

impl EndpointMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Endpoints in lexicographic path order
    pub fn iter(&self) -> impl Iterator<Item = Endpoint<'_>> {
        self.0.iter().map(|(path, method)| Endpoint {
            path: path.as_str(),
            method: method.as_str(),
        })
    }

    /// Declared method for a path, if configured
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for EndpointMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse endpoint map JSON, rejecting paths that do not start with '/'
pub fn parse_endpoints(content: &str) -> Result<EndpointMap> {
    let map: EndpointMap = serde_json::from_str(content)
        .context("Expected a JSON object mapping endpoint paths to HTTP methods")?;

    for endpoint in map.iter() {
        if !endpoint.path.starts_with('/') {
            bail!(
                "Invalid endpoint path \"{}\": paths must begin with '/'",
                endpoint.path
            );
        }
    }

    Ok(map)
}

/// Read and parse `<root>/papi.paths.json`
pub fn load_endpoints(root: &Path) -> Result<EndpointMap> {
    let path = paths::paths_file(root);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read paths file {}", path.display()))?;

    parse_endpoints(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_orders_paths() {
        let map = parse_endpoints(r#"{"/b": "GET", "/a": "post", "/c": "GET"}"#).unwrap();
        let order: Vec<&str> = map.iter().map(|e| e.path).collect();
        assert_eq!(order, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_method_normalised_for_display() {
        let map = parse_endpoints(r#"{"/a": " post "}"#).unwrap();
        let endpoint = map.iter().next().unwrap();
        assert_eq!(endpoint.method(), "POST");
        assert!(!endpoint.declares_get());
    }

    #[test]
    fn test_rejects_relative_path() {
        let err = parse_endpoints(r#"{"api/greet": "GET"}"#).unwrap_err();
        assert!(err.to_string().contains("must begin with '/'"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(parse_endpoints(r#"["/api/greet"]"#).is_err());
        assert!(parse_endpoints(r#"{"/api/greet": 1}"#).is_err());
        assert!(parse_endpoints("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_endpoints(tmp.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("papi.paths.json"));
    }

    #[test]
    fn test_config_round_trips_field_names() {
        let config: ProjectConfig =
            serde_json::from_str(r#"{"api": "flask", "version": "1.0.0"}"#).unwrap();
        assert_eq!(config.api, "flask");
        assert_eq!(config.version, "1.0.0");
    }
}
