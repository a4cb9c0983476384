//! Single source of truth for every filesystem name papi touches.
//!
//! No I/O here. One file shows the whole layout of a scaffolded project:
//!
//! ```text
//! <project>/
//! ├── papi.config.json          # Project descriptor (written once, never read back)
//! ├── papi.paths.json           # Endpoint map: path -> declared method
//! ├── papi.toml                 # Optional local settings for run/test
//! └── templates/
//!     └── api-example/
//!         └── app.py            # Example service launched by `papi run`
//! ```

use std::path::{Path, PathBuf};

/// Project descriptor file name
pub const CONFIG_FILE: &str = "papi.config.json";

/// Endpoint map file name
pub const PATHS_FILE: &str = "papi.paths.json";

/// Optional settings file consulted by `run` and `test`
pub const SETTINGS_FILE: &str = "papi.toml";

/// Example service script, relative to the project root
pub const APP_SCRIPT: &str = "templates/api-example/app.py";

/// `<root>/papi.paths.json`
pub fn paths_file(root: &Path) -> PathBuf {
    root.join(PATHS_FILE)
}

/// `<root>/papi.toml`
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

/// `<root>/templates/api-example/app.py`
pub fn app_script(root: &Path) -> PathBuf {
    root.join(APP_SCRIPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_relative_to_root() {
        let root = Path::new("/tmp/demo");
        assert_eq!(paths_file(root), PathBuf::from("/tmp/demo/papi.paths.json"));
        assert_eq!(
            app_script(root),
            PathBuf::from("/tmp/demo/templates/api-example/app.py")
        );
    }
}
