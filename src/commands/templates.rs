use anyhow::Result;
use colored::Colorize;

use papi::templates::{DEFAULT_TEMPLATE, REGISTRY};

/// List registered project templates
pub fn execute() -> Result<()> {
    for template in REGISTRY {
        let descriptor = template.descriptor();
        let marker = if template.name == DEFAULT_TEMPLATE {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{}  {} [{} {}]",
            template.name.bold(),
            marker,
            template.description,
            descriptor.api,
            descriptor.version
        );
    }
    Ok(())
}
