//! Global configuration location (`~/.config/fieldstash/config.toml`)

use std::path::PathBuf;

use crate::error::{Result, StashError};

use super::StashConfig;

const CONFIG_DIR: &str = "fieldstash";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FIELDSTASH_CONFIG_DIR";

/// Path of the global config file
pub fn config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| StashError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Load the global config, or defaults if it does not exist yet
pub fn load() -> Result<StashConfig> {
    StashConfig::load_or_default(&config_path()?)
}
