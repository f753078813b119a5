//! `fieldstash backup` command - capture fields into the cache field
//!
//! - Refuses note types that are not enabled (message on stderr, exit 2)
//! - Skips notes without the cache field (logged, exit 3)
//! - Leaves the note alone when every eligible field is empty
//! - `--new`: the note is still being added, so the file is left alone and
//!   the updated note is printed to stdout instead

use std::path::Path;

use crate::cli::Cli;
use crate::commands::notify::StderrNotifier;
use crate::commands::outcome::{print_outcome, print_pending};
use crate::commands::record_file::JsonRecordFile;
use fieldstash_core::config::StashConfig;
use fieldstash_core::error::Result;
use fieldstash_core::stash::run_backup;

/// Execute the backup command
pub fn execute(cli: &Cli, config: &StashConfig, path: &Path, add_mode: bool) -> Result<()> {
    let mut file = JsonRecordFile::new(path);
    let mut record = file.load()?;

    let outcome = run_backup(&mut record, config, &StderrNotifier, &mut file, add_mode)?;

    if add_mode {
        print_pending(cli, file.path(), &outcome, &record)?;
    } else {
        print_outcome(cli, file.path(), &outcome, outcome.mutated());
    }
    Ok(())
}
