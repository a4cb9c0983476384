//! Launch the example service for `papi run`
//!
//! The child is awaited to completion, so a server started in foreground mode
//! keeps `papi run` blocked until it exits. stdout and stderr share one pipe,
//! so the captured output keeps the order the child wrote it in.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::paths;

/// Completed run of the example service
#[derive(Debug)]
pub struct AppRun {
    pub status: ExitStatus,
    /// Interleaved stdout and stderr, as the child wrote them
    pub output: Vec<u8>,
}

/// Run `<python> templates/api-example/app.py` from `root` and capture its combined output.
///
/// Every failure (interpreter missing, script missing, non-zero exit) surfaces
/// as "Error running the app" with the specific cause attached.
pub fn run_app(root: &Path, python: &str) -> Result<AppRun> {
    launch(root, python).context("Error running the app")
}

fn launch(root: &Path, python: &str) -> Result<AppRun> {
    let interpreter = which::which(python)
        .with_context(|| format!("Interpreter '{}' not found in PATH", python))?;

    let script = paths::app_script(root);
    if !script.is_file() {
        bail!(
            "Script {} not found (run from a project created with `papi new`)",
            script.display()
        );
    }

    let (mut reader, writer) = std::io::pipe().context("Failed to create output pipe")?;

    // The command holds the write ends; it must be dropped before reading to EOF.
    let mut child = {
        let mut command = Command::new(&interpreter);
        command
            .arg(paths::APP_SCRIPT)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(writer.try_clone().context("Failed to share output pipe")?)
            .stderr(writer);

        tracing::debug!(
            interpreter = %interpreter.display(),
            script = paths::APP_SCRIPT,
            cwd = %root.display(),
            "spawning app"
        );

        command
            .spawn()
            .with_context(|| format!("Failed to start {}", interpreter.display()))?
    };

    let mut raw = Vec::new();
    if let Err(e) = reader.read_to_end(&mut raw) {
        let _ = child.kill();
        let _ = child.wait();
        return Err(e).context("Failed to read app output");
    }

    let status = child.wait().context("Failed to wait for app")?;
    if !status.success() {
        bail!(
            "App exited with {}\n{}",
            status,
            String::from_utf8_lossy(&raw).trim_end()
        );
    }

    Ok(AppRun {
        status,
        output: raw,
    })
}
