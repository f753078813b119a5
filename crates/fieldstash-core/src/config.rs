//! Backup/restore configuration
//!
//! Stored as TOML, either at an explicit path or in the global config
//! directory (see [`global`]).

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, StashError};
use crate::host::ConfigProvider;

pub use types::{StashConfig, DEFAULT_CACHE_FIELD};

impl StashConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StashConfig = toml::from_str(&content)?;
        if config.cache_field.trim().is_empty() {
            return Err(StashError::Other(format!(
                "invalid config {}: cache_field must not be empty",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StashError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

impl ConfigProvider for StashConfig {
    fn enabled_notetypes(&self) -> &[String] {
        &self.enabled_notetypes
    }

    fn ignored_backup_fields(&self) -> &[String] {
        &self.ignored_backup_fields
    }

    fn cache_field(&self) -> &str {
        &self.cache_field
    }

    fn title_index(&self) -> usize {
        self.title_index
    }
}
