//! Template registry for scaffolded projects.
//!
//! Each project type is a set of asset files embedded at build time and
//! rendered with simple `{{project_name}}` substitution. Adding a project type
//! means dropping its assets under `src/templates/<type>/` and registering it
//! in [`REGISTRY`].

use anyhow::{bail, Result};

use crate::paths;
use crate::project::ProjectConfig;

/// Project type used when none is requested
pub const DEFAULT_TEMPLATE: &str = "flask";

mod flask {
    pub const CONFIG_JSON: &str = include_str!("flask/config_json.tmpl");
    pub const PATHS_JSON: &str = include_str!("flask/paths_json.tmpl");
    pub const APP_PY: &str = include_str!("flask/app_py.tmpl");
}

/// A file to write into the scaffolded project, with its relative path and rendered content.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: String,
}

/// A registered project type
#[derive(Debug)]
pub struct ProjectTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Framework name recorded in papi.config.json
    pub api: &'static str,
    /// Version recorded in papi.config.json
    pub version: &'static str,
    assets: &'static [(&'static str, &'static str)],
}

/// All registered project types
pub static REGISTRY: &[ProjectTemplate] = &[ProjectTemplate {
    name: "flask",
    description: "Flask service with one GET endpoint at /api/greet",
    api: "flask",
    version: "1.0.0",
    assets: &[
        (paths::CONFIG_FILE, flask::CONFIG_JSON),
        (paths::PATHS_FILE, flask::PATHS_JSON),
        (paths::APP_SCRIPT, flask::APP_PY),
    ],
}];

fn render(template: &str, project_name: &str) -> String {
    template.replace("{{project_name}}", project_name)
}

impl ProjectTemplate {
    /// Descriptor this template writes to papi.config.json
    pub fn descriptor(&self) -> ProjectConfig {
        ProjectConfig {
            api: self.api.to_string(),
            version: self.version.to_string(),
        }
    }

    /// Render every asset for a project called `project_name`, in write order
    pub fn render(&self, project_name: &str) -> Vec<TemplateFile> {
        self.assets
            .iter()
            .map(|&(path, content)| TemplateFile {
                path,
                content: render(content, project_name),
            })
            .collect()
    }
}

/// Look up a project type by name (case-insensitive)
pub fn get(name: &str) -> Result<&'static ProjectTemplate> {
    match REGISTRY.iter().find(|t| t.name.eq_ignore_ascii_case(name)) {
        Some(template) => Ok(template),
        None => {
            let known: Vec<&str> = REGISTRY.iter().map(|t| t.name).collect();
            bail!(
                "Unknown project template '{}'. Available: {}",
                name,
                known.join(", ")
            )
        }
    }
}
