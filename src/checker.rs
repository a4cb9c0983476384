//! Endpoint smoke test for `papi test`
//!
//! Walks the endpoint map in path order and issues one blocking GET per entry
//! against the configured base URL, writing each response body verbatim.
//! Status codes are reported but never treated as failures; only transport
//! errors (connection refused, body read failures) are.
//!
//! Every request is a GET whatever method the map declares. A declared method
//! other than GET is logged as a warning.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::config::Settings;
use crate::project::{self, Endpoint, EndpointMap};

/// What happened for one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered; any status counts
    Responded { status: u16, body: Vec<u8> },
    /// Transport-level failure
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct EndpointResult {
    pub path: String,
    /// Declared method, upper-cased
    pub method: String,
    pub outcome: Outcome,
}

/// Results of one checker run, in the order endpoints were tested
#[derive(Debug, Default)]
pub struct CheckReport {
    pub results: Vec<EndpointResult>,
}

impl CheckReport {
    /// Paths whose request failed
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
            .map(|r| r.path.as_str())
            .collect()
    }
}

/// Blocking endpoint checker
pub struct Checker {
    client: Client,
    base_url: String,
    keep_going: bool,
}

impl Checker {
    /// Build a checker for `base_url`. A `timeout` of None waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder()
            .user_agent(concat!("papi/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout);
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            keep_going: false,
        })
    }

    /// Continue past failed endpoints instead of stopping at the first one
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Test every endpoint, writing progress and bodies to `out`.
    ///
    /// Without keep-going the first transport failure is returned as an error
    /// and nothing further is written. With keep-going, failures are recorded
    /// in the report and the caller decides how to surface them.
    pub fn check(&self, endpoints: &EndpointMap, out: &mut impl Write) -> Result<CheckReport> {
        let mut report = CheckReport::default();

        for endpoint in endpoints.iter() {
            writeln!(
                out,
                "Testing endpoint: {} ({})",
                endpoint.path,
                endpoint.method()
            )?;

            let outcome = match self.fetch(&endpoint) {
                Ok((status, body)) => {
                    writeln!(out, "Test result for '{}' endpoint ({}):", endpoint.path, status)?;
                    out.write_all(&body)?;
                    writeln!(out)?;
                    Outcome::Responded {
                        status: status.as_u16(),
                        body,
                    }
                }
                Err(e) if !self.keep_going => return Err(e),
                Err(e) => {
                    let error = format!("{:#}", e);
                    writeln!(out, "{}", error)?;
                    Outcome::Failed { error }
                }
            };

            report.results.push(EndpointResult {
                path: endpoint.path.to_string(),
                method: endpoint.method(),
                outcome,
            });
        }

        Ok(report)
    }

    fn fetch(&self, endpoint: &Endpoint<'_>) -> Result<(reqwest::StatusCode, Vec<u8>)> {
        if !endpoint.declares_get() {
            tracing::warn!(
                path = endpoint.path,
                declared = %endpoint.method(),
                "endpoint declares a non-GET method; sending GET"
            );
        }

        let url = format!("{}{}", self.base_url, endpoint.path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Error testing endpoint '{}'", endpoint.path))?;

        let status = response.status();
        // bytes() consumes the response, so the connection is released on both paths.
        let body = response
            .bytes()
            .with_context(|| format!("Error reading response from '{}'", endpoint.path))?;

        Ok((status, body.to_vec()))
    }
}

/// Load `<root>/papi.paths.json` and test every endpoint in it.
///
/// A missing or malformed paths file fails before any request is sent. With
/// `keep_going`, failed endpoints are aggregated into one error after the run.
pub fn check_project(
    root: &Path,
    settings: &Settings,
    keep_going: bool,
    out: &mut impl Write,
) -> Result<CheckReport> {
    let endpoints = project::load_endpoints(root)?;
    if endpoints.is_empty() {
        writeln!(out, "No endpoints configured in {}", crate::paths::PATHS_FILE)?;
        return Ok(CheckReport::default());
    }

    let checker = Checker::new(settings.base_url(), settings.timeout())?.keep_going(keep_going);
    let report = checker.check(&endpoints, out)?;

    let failures = report.failures();
    if !failures.is_empty() {
        bail!(
            "{} of {} endpoints failed: {}",
            failures.len(),
            report.results.len(),
            failures.join(", ")
        );
    }

    Ok(report)
}

fn is_loopback(base_url: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(base_url) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") | Some("[::1]") => true,
        Some(host) => host.starts_with("127."),
        None => false,
    }
}
