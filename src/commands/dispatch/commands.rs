//! Command implementations for all fieldstash commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{backup, inspect, restore};
use fieldstash_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Backup { record, new } => {
                let config = ctx.load_config()?;
                backup::execute(ctx.cli, &config, record, *new)
            }
            Commands::Restore { record, new } => {
                let config = ctx.load_config()?;
                restore::execute(ctx.cli, &config, record, *new)
            }
            Commands::Inspect { record } => {
                let config = ctx.load_config()?;
                inspect::execute(ctx.cli, &config, record)
            }
        }
    }
}
