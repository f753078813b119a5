//! Backup encoding

use tracing::debug;

use crate::error::Result;
use crate::host::FieldAccess;
use crate::payload::{self, BackupItem};

/// Result of a backup that captured at least one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBackup {
    /// Bare payload (base64, no envelope)
    pub payload: String,
    /// Fields that were captured and must now be blanked, in field order
    pub cleared_fields: Vec<String>,
}

impl EncodedBackup {
    /// Payload wrapped in the cache field envelope
    pub fn cache_value(&self) -> String {
        payload::wrap(&self.payload)
    }
}

/// Capture the non-empty eligible fields of a record.
///
/// Returns `Ok(None)` when every eligible field is empty or whitespace; the
/// record must then be left alone. The record itself is never modified.
/// Indices past the end of the field list are ignored.
pub fn encode<R>(record: &R, eligible: &[usize]) -> Result<Option<EncodedBackup>>
where
    R: FieldAccess + ?Sized,
{
    let names = record.field_names();
    let mut items = Vec::new();

    for &index in eligible {
        let Some(name) = names.get(index).copied() else {
            continue;
        };
        let content = record.field(name).unwrap_or_default();
        if content.trim().is_empty() {
            continue;
        }
        items.push(BackupItem::new(name, content));
    }

    if items.is_empty() {
        debug!(schema = record.schema_name(), "nothing to back up");
        return Ok(None);
    }

    let payload = payload::encode_items(&items)?;
    let cleared_fields = items.into_iter().map(|item| item.field).collect();

    Ok(Some(EncodedBackup {
        payload,
        cleared_fields,
    }))
}
