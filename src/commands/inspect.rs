//! `fieldstash inspect` command - decode the cache field without touching the note

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::record_file::JsonRecordFile;
use fieldstash_core::config::StashConfig;
use fieldstash_core::decode_items;
use fieldstash_core::error::{Result, StashError};
use fieldstash_core::host::FieldAccess;
use tracing::{error, warn};

/// Execute the inspect command
pub fn execute(cli: &Cli, config: &StashConfig, path: &Path) -> Result<()> {
    let record = JsonRecordFile::new(path).load()?;
    let cache_field = config.cache_field.as_str();

    let Some(content) = record.field(cache_field) else {
        let err = StashError::missing_cache_field(&record.notetype, cache_field);
        warn!(path = %path.display(), error = %err, "inspect skipped");
        return Err(err);
    };

    let items = decode_items(content).inspect_err(|e| {
        error!(path = %path.display(), error = %e, "inspect failed");
    })?;

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "field": item.field,
                        "html": item.html,
                        "known": record.has_field(&item.field),
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(output));
        }
        OutputFormat::Human => {
            if items.is_empty() {
                if !cli.quiet {
                    println!("cache is empty");
                }
                return Ok(());
            }
            for item in &items {
                let marker = if record.has_field(&item.field) {
                    ""
                } else {
                    " (unknown field)"
                };
                println!("{}{}: {}", item.field, marker, item.html);
            }
        }
    }

    Ok(())
}
