//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Cache field used when the config does not name one
pub const DEFAULT_CACHE_FIELD: &str = "Cache";

/// Backup/restore configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashConfig {
    /// Note types permitted to use backup/restore
    #[serde(default)]
    pub enabled_notetypes: Vec<String>,

    /// Field names never captured by a backup (case-insensitive)
    #[serde(default = "default_ignored_backup_fields")]
    pub ignored_backup_fields: Vec<String>,

    /// Field that holds the encoded payload
    #[serde(default = "default_cache_field")]
    pub cache_field: String,

    /// Position of the title field (never backed up, never restored)
    #[serde(default)]
    pub title_index: usize,
}

impl Default for StashConfig {
    fn default() -> Self {
        Self {
            enabled_notetypes: Vec::new(),
            ignored_backup_fields: default_ignored_backup_fields(),
            cache_field: default_cache_field(),
            title_index: 0,
        }
    }
}

fn default_ignored_backup_fields() -> Vec<String> {
    vec!["image".to_string(), "cache".to_string()]
}

fn default_cache_field() -> String {
    DEFAULT_CACHE_FIELD.to_string()
}
