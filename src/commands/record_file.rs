//! Note files on disk
//!
//! A note file is the JSON form of [`Record`]. Writes go to a temporary
//! sibling first and are renamed into place, so a note file is either the
//! old version or the new one.

use std::fs;
use std::path::{Path, PathBuf};

use fieldstash_core::error::{Result, StashError};
use fieldstash_core::host::Persist;
use fieldstash_core::record::Record;
use tracing::debug;

/// A note file that can be loaded and committed back
#[derive(Debug, Clone)]
pub struct JsonRecordFile {
    path: PathBuf,
}

impl JsonRecordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the note
    pub fn load(&self) -> Result<Record> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StashError::invalid_record(&self.path, e))?;
        let record: Record = serde_json::from_str(&content)
            .map_err(|e| StashError::invalid_record(&self.path, e))?;
        record
            .validate()
            .map_err(|e| StashError::invalid_record(&self.path, e))?;
        debug!(path = %self.path.display(), notetype = %record.notetype, "load_record");
        Ok(record)
    }

    /// Write the note, replacing the file atomically
    pub fn save(&self, record: &Record) -> Result<()> {
        let mut content = serde_json::to_string_pretty(record)?;
        content.push('\n');

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), "save_record");
        Ok(())
    }
}

impl Persist<Record> for JsonRecordFile {
    fn persist(&mut self, record: &Record) -> Result<()> {
        self.save(record)
    }
}
