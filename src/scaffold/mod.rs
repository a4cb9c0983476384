//! Project scaffolding for `papi new`
//!
//! Writes a template's files under `<base>/<name>`. There is no rollback: if a
//! write fails part way, whatever was created stays on disk and the error
//! names the step that failed.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::templates::ProjectTemplate;

/// Result of a successful scaffold
#[derive(Debug)]
pub struct ScaffoldedProject {
    /// Root directory of the new project
    pub root: PathBuf,
    /// Files written, relative to `root`, in write order
    pub files: Vec<&'static str>,
}

pub struct Scaffold {
    base: PathBuf,
}

impl Scaffold {
    /// Scaffold projects as children of `base`
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    pub fn create_project(&self, name: &str, template: &ProjectTemplate) -> Result<ScaffoldedProject> {
        validate_name(name)?;

        let root = self.base.join(name);
        if root.exists() {
            bail!("Project \"{}\" already exists", name);
        }

        tracing::debug!(root = %root.display(), template = template.name, "scaffolding project");

        let files = template.render(name);
        for file in &files {
            let dest = root.join(file.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(&dest, &file.content)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
        }

        Ok(ScaffoldedProject {
            root,
            files: files.iter().map(|f| f.path).collect(),
        })
    }
}

/// Validate that the project name is usable as a single directory name.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Project name cannot be empty");
    }
    if name == ".." || name.contains('/') || name.contains('\\') {
        bail!("Invalid project name \"{}\": must not contain path separators", name);
    }
    if name.starts_with('.') || name.starts_with('-') {
        bail!("Invalid project name \"{}\": must not start with '.' or '-'", name);
    }
    Ok(())
}
