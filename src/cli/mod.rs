//! CLI argument parsing for fieldstash
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Fieldstash - back up a note's fields into its cache field and restore them
#[derive(Parser, Debug)]
#[command(name = "fieldstash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the global config)
    #[arg(long, global = true, env = "FIELDSTASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Back up fields into the cache field and clear them
    Backup {
        /// Note file (JSON)
        record: PathBuf,

        /// The note is still being added: print the updated note instead of writing it back
        #[arg(long)]
        new: bool,
    },

    /// Restore fields from the cache field and clear the cache
    Restore {
        /// Note file (JSON)
        record: PathBuf,

        /// The note is still being added: print the updated note instead of writing it back
        #[arg(long)]
        new: bool,
    },

    /// Show what the cache field holds without changing the note
    Inspect {
        /// Note file (JSON)
        record: PathBuf,
    },
}
