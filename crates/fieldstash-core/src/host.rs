//! Collaborator seams between the core and whatever hosts it
//!
//! The core never talks to an editor, a collection or a config file
//! directly. A host hands it something that implements these traits and
//! decides what to do with the result.

use std::collections::HashSet;

use crate::error::Result;
use crate::select;

/// Field-level access to one note
pub trait FieldAccess {
    /// Name of the note type the record conforms to
    fn schema_name(&self) -> &str;

    /// Field names in schema (display) order
    fn field_names(&self) -> Vec<&str>;

    /// Current content of a field, `None` if the schema has no such field
    fn field(&self, name: &str) -> Option<&str>;

    /// Overwrite a field's content
    fn set_field(&mut self, name: &str, value: String) -> Result<()>;

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Source of the backup/restore settings
pub trait ConfigProvider {
    /// Note types permitted to use backup/restore
    fn enabled_notetypes(&self) -> &[String];

    /// Field names never captured by a backup, compared case-insensitively
    fn ignored_backup_fields(&self) -> &[String];

    /// Field that receives the encoded payload
    fn cache_field(&self) -> &str;

    /// Position of the title field, which is never backed up or restored
    fn title_index(&self) -> usize {
        0
    }

    /// Whether backup/restore may run on this note type (exact match)
    fn is_enabled(&self, schema: &str) -> bool {
        self.enabled_notetypes().iter().any(|n| n == schema)
    }

    /// Lower-cased ignore list
    fn ignore_set(&self) -> HashSet<String> {
        select::ignore_set(self.ignored_backup_fields())
    }
}

/// User-notification surface
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Commits a mutated record to durable storage
pub trait Persist<R: ?Sized> {
    fn persist(&mut self, record: &R) -> Result<()>;
}
