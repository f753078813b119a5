//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use fieldstash_core::config::{global, StashConfig};
use fieldstash_core::error::Result;
use tracing::debug;

/// Load the config named on the command line, or the global one
pub fn load_config(cli: &Cli) -> Result<StashConfig> {
    match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "load_config");
            StashConfig::load(path)
        }
        None => global::load(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_config(&self) -> Result<StashConfig> {
        let config = load_config(self.cli)?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
