pub mod checker;
pub mod config;
pub mod logging;
pub mod paths;
pub mod project;
pub mod runner;
pub mod scaffold;
pub mod templates;

// Re-export commonly used types
pub use checker::{CheckReport, Checker};
pub use config::Settings;
pub use project::{EndpointMap, ProjectConfig};
pub use scaffold::Scaffold;
