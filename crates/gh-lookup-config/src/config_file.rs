//! Configuration file discovery
//!
//! `.gh-user-lookup.toml` is looked up in the working directory, then in the
//! home directory. The first file that can be read wins; a missing file is
//! not an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the configuration file
pub const CONFIG_FILE: &str = ".gh-user-lookup.toml";

/// Locations searched for the configuration file, in lookup order
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    paths.extend(dirs::home_dir().map(|home| home.join(CONFIG_FILE)));
    paths
}

/// Content of the first configuration file found, if any
pub fn load_config_file() -> Option<String> {
    candidate_paths()
        .iter()
        .find_map(|path| read_if_present(path))
}

fn read_if_present(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
            None
        }
    }
}
