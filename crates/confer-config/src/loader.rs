//! Config file loading from explicit paths or default locations.

use crate::{ConferConfig, ConfigError};
use directories::UserDirs;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "confer.json5";
/// Default config directory under the user home.
const DEFAULT_CONFIG_DIR: &str = ".confer";

/// Load and parse a config file from an explicit path.
pub fn load_from_path(path: &Path) -> Result<ConferConfig, ConfigError> {
    debug!("loading config (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let config = json5::from_str(&contents)?;
    Ok(config)
}

/// Load config from the first default location that exists.
///
/// Candidates are `confer.json5` in `cwd`, then `~/.confer/confer.json5`.
/// When none exists the built-in defaults apply.
pub fn load_default(cwd: &Path) -> Result<ConferConfig, ConfigError> {
    for candidate in default_config_paths(cwd) {
        if candidate.exists() {
            info!("using config file (path={})", candidate.display());
            return load_from_path(&candidate);
        }
        debug!("config file missing (path={})", candidate.display());
    }
    Ok(ConferConfig::default())
}

/// Candidate config paths in precedence order.
fn default_config_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(DEFAULT_CONFIG_FILE)];
    if let Some(user) = UserDirs::new() {
        paths.push(
            user.home_dir()
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILE),
        );
    }
    paths
}
