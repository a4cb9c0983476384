use anyhow::Result;
use colored::Colorize;

use papi::scaffold::Scaffold;
use papi::templates;

/// Scaffold `<name>` in the current directory from the requested template
pub fn execute(name: String, template: String) -> Result<()> {
    let template = templates::get(&template)?;
    let project = Scaffold::new(".").create_project(&name, template)?;

    for file in &project.files {
        println!("  {} {}", "✓".green(), file);
    }
    println!();
    println!("✅ Project '{}' created successfully!", name);
    println!();
    println!("  cd {}", name);
    println!("  papi run");
    println!("  papi test");

    Ok(())
}
