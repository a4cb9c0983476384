use anyhow::{Context, Result};
use std::io::Write;

use papi::config::Settings;
use papi::{paths, runner};

pub fn execute(python: Option<String>) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let settings = Settings::load(&root)?.with_overrides(None, python, None);
    settings.log_startup();

    println!("🚀 Running {} with {}", paths::APP_SCRIPT, settings.python);

    let run = runner::run_app(&root, &settings.python)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "API is running:")?;
    out.write_all(&run.output)?;
    out.flush()?;

    Ok(())
}
