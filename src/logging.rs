//! Diagnostic logging
//!
//! Results go to stdout through `println!`. Diagnostics go to stderr through
//! `tracing`, filtered by `PAPI_LOG` (e.g. `PAPI_LOG=debug`), default `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PAPI_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
