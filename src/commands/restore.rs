//! `fieldstash restore` command - write cached fields back and clear the cache
//!
//! Restoring is all-or-nothing: a cache value that cannot be decoded leaves
//! the note file exactly as it was. With `--new` the file is never rewritten
//! and the updated note is printed to stdout.

use std::path::Path;

use crate::cli::Cli;
use crate::commands::notify::StderrNotifier;
use crate::commands::outcome::{print_outcome, print_pending};
use crate::commands::record_file::JsonRecordFile;
use fieldstash_core::config::StashConfig;
use fieldstash_core::error::Result;
use fieldstash_core::stash::run_restore;

/// Execute the restore command
pub fn execute(cli: &Cli, config: &StashConfig, path: &Path, add_mode: bool) -> Result<()> {
    let mut file = JsonRecordFile::new(path);
    let mut record = file.load()?;

    let outcome = run_restore(&mut record, config, &StderrNotifier, &mut file, add_mode)?;

    if add_mode {
        print_pending(cli, file.path(), &outcome, &record)?;
    } else {
        print_outcome(cli, file.path(), &outcome, outcome.mutated());
    }
    Ok(())
}
