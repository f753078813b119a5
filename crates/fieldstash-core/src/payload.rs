//! Payload wire format
//!
//! A payload is built in three layers:
//! 1. a JSON array of `{"field": ..., "html": ...}` objects in capture order,
//!    written with `", "` and `": "` separators and non-ASCII left unescaped;
//! 2. standard base64 (padded, unwrapped) of the UTF-8 JSON bytes;
//! 3. the `<div>...</div>` envelope stored in the cache field.
//!
//! Existing cache fields were written in exactly this shape, so the encoder
//! must keep producing it byte for byte.

use std::io;
use std::sync::OnceLock;

use base64::{engine::general_purpose, Engine as _};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::bail_corrupt;
use crate::error::{Result, StashError};

/// Opening tag of the cache field envelope
pub const ENVELOPE_OPEN: &str = "<div>";
/// Closing tag of the cache field envelope
pub const ENVELOPE_CLOSE: &str = "</div>";

/// One captured field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupItem {
    pub field: String,
    pub html: String,
}

impl BackupItem {
    pub fn new(field: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            html: html.into(),
        }
    }
}

/// Item as read back from a payload; either key may be missing
#[derive(Debug, Deserialize)]
pub(crate) struct StoredItem {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

/// JSON formatter matching the separators of previously written payloads
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize items to the inner JSON text
pub fn to_json(items: &[BackupItem]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    items
        .serialize(&mut ser)
        .map_err(|e| StashError::unexpected("serialize backup items", e))?;
    String::from_utf8(buf).map_err(|e| StashError::unexpected("serialize backup items", e))
}

/// Encode items into a bare payload (base64 of the JSON text, no envelope)
pub fn encode_items(items: &[BackupItem]) -> Result<String> {
    let json = to_json(items)?;
    Ok(general_purpose::STANDARD.encode(json.as_bytes()))
}

/// Wrap a bare payload in the cache field envelope
pub fn wrap(payload: &str) -> String {
    format!("{ENVELOPE_OPEN}{payload}{ENVELOPE_CLOSE}")
}

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("valid entity regex")
    })
}

fn decode_entity(caps: &Captures) -> String {
    let body = &caps[1];
    let decoded = if let Some(hex) = body
        .strip_prefix("#x")
        .or_else(|| body.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match body {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => None,
        }
    };
    decoded.map_or_else(|| caps[0].to_string(), String::from)
}

/// Plain text content of a cache field: markup and comments removed,
/// entities decoded, surrounding whitespace trimmed
pub fn text_content(markup: &str) -> String {
    let without_comments = comment_regex().replace_all(markup, "");
    let without_tags = tag_regex().replace_all(&without_comments, "");
    let decoded = entity_regex().replace_all(&without_tags, decode_entity);
    decoded.trim().to_string()
}

/// Extract the bare payload from a cache field value.
///
/// Rich-text editors may re-wrap the `<div>` or break long lines, so any
/// markup is ignored and whitespace inside the base64 text is dropped.
pub fn strip_envelope(cache_content: &str) -> Result<String> {
    let text: String = text_content(cache_content)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if text.is_empty() {
        bail_corrupt!("cache field contains no payload text");
    }
    Ok(text)
}

/// Decode a bare payload back into stored items
pub(crate) fn decode_payload(payload: &str) -> Result<Vec<StoredItem>> {
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| StashError::corrupt(format!("invalid base64: {e}")))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| StashError::corrupt(format!("payload is not UTF-8: {e}")))?;
    serde_json::from_str(&json).map_err(|e| StashError::corrupt(format!("invalid JSON: {e}")))
}
