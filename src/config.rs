use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::paths;

/// Service address the endpoint checker targets by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Interpreter used to launch the example service by default
pub const DEFAULT_PYTHON: &str = "python3";

pub const BASE_URL_ENV: &str = "PAPI_BASE_URL";
pub const PYTHON_ENV: &str = "PAPI_PYTHON";

/// Settings for `papi run` and `papi test`
///
/// Layered lowest to highest: defaults, `papi.toml`, environment, CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base URL endpoint paths are appended to
    pub base_url: String,
    /// Interpreter for the example service
    pub python: String,
    /// Per-request timeout; None waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            python: DEFAULT_PYTHON.to_string(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings for a project rooted at `root`, applying the process environment
    pub fn load(root: &Path) -> Result<Self> {
        let mut settings = Self::from_file(root)?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read `<root>/papi.toml`, falling back to defaults when it is absent
    fn from_file(root: &Path) -> Result<Self> {
        let path = paths::settings_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(python) = lookup(PYTHON_ENV).filter(|v| !v.is_empty()) {
            self.python = python;
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        python: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(python) = python {
            self.python = python;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    /// Base URL without a trailing '/'
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn log_startup(&self) {
        tracing::debug!(
            base_url = self.base_url(),
            python = %self.python,
            timeout_secs = ?self.timeout_secs,
            "settings loaded"
        );
    }
}
