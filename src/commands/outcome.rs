//! Output for finished backup/restore operations

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use fieldstash_core::error::Result;
use fieldstash_core::record::Record;
use fieldstash_core::stash::Outcome;

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::BackedUp { .. } => "backed_up",
        Outcome::Restored { .. } => "restored",
        Outcome::NothingToBackup => "nothing_to_backup",
        Outcome::EmptyCache => "empty_cache",
    }
}

fn human_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::BackedUp { fields } => format!("backed up: {}", fields.join(", ")),
        Outcome::Restored { fields } if fields.is_empty() => {
            "restored: (no matching fields)".to_string()
        }
        Outcome::Restored { fields } => format!("restored: {}", fields.join(", ")),
        Outcome::NothingToBackup => "nothing to back up".to_string(),
        Outcome::EmptyCache => "cache is empty".to_string(),
    }
}

fn outcome_json(path: &Path, outcome: &Outcome, persisted: bool) -> serde_json::Value {
    serde_json::json!({
        "record": path.display().to_string(),
        "outcome": outcome_name(outcome),
        "fields": outcome.fields(),
        "persisted": persisted,
    })
}

pub fn print_outcome(cli: &Cli, path: &Path, outcome: &Outcome, persisted: bool) {
    match cli.format {
        OutputFormat::Json => println!("{}", outcome_json(path, outcome, persisted)),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}", human_line(outcome));
            }
        }
    }
}

/// Hand a note that is still being added back to the caller.
///
/// The note file is not rewritten, so the updated note goes to stdout:
/// pretty JSON in human mode (summary on stderr), or under `"note"` in the
/// JSON report.
pub fn print_pending(cli: &Cli, path: &Path, outcome: &Outcome, record: &Record) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let mut output = outcome_json(path, outcome, false);
            output["note"] = serde_json::to_value(record)?;
            println!("{}", output);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                eprintln!("{}", human_line(outcome));
            }
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    }
    Ok(())
}
