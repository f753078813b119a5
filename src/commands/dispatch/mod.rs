//! Command dispatch logic for fieldstash

use std::time::Instant;

use crate::cli::Cli;
use fieldstash_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    let result = cli.command.execute(&ctx);
    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
