//! Restore decoding

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::payload::{self, BackupItem};

/// Decode every item of a cache field value, whatever field it names.
///
/// Empty or whitespace-only content yields no items. A missing `html`
/// becomes an empty string; items without a field name are dropped.
pub fn decode_items(cache_content: &str) -> Result<Vec<BackupItem>> {
    if cache_content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let bare = payload::strip_envelope(cache_content)?;
    let stored = payload::decode_payload(&bare)?;

    let mut items = Vec::with_capacity(stored.len());
    for item in stored {
        match item.field {
            Some(field) if !field.is_empty() => {
                items.push(BackupItem::new(field, item.html.unwrap_or_default()));
            }
            _ => debug!("dropping payload item without a field name"),
        }
    }
    Ok(items)
}

/// Decode a cache field value into `(field, html)` assignments.
///
/// Items naming a field outside `valid_fields` are dropped, so a payload
/// written before the note type changed still restores the fields that
/// remain. Otherwise behaves like [`decode_items`].
///
/// Any failure to strip, base64-decode or parse the payload is a
/// [`crate::StashError::CorruptPayload`]; no partial result is returned.
pub fn decode<S>(cache_content: &str, valid_fields: &HashSet<S>) -> Result<Vec<(String, String)>>
where
    S: std::borrow::Borrow<str> + std::hash::Hash + Eq,
{
    let assignments = decode_items(cache_content)?
        .into_iter()
        .filter(|item| {
            let known = valid_fields.contains(item.field.as_str());
            if !known {
                debug!(field = %item.field, "dropping payload item for unknown field");
            }
            known
        })
        .map(|item| (item.field, item.html))
        .collect();
    Ok(assignments)
}
