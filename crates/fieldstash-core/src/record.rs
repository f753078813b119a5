//! In-memory note representation
//!
//! A [`Record`] is an ordered list of named text fields plus the name of the
//! note type it belongs to. It is also the on-disk shape the binary reads
//! and writes:
//!
//! ```json
//! {"notetype": "Basic", "fields": [{"name": "Front", "value": "Hello"}]}
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StashError};
use crate::host::FieldAccess;

/// A single named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A note: note type name plus fields in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub notetype: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Record {
    /// Build a record, rejecting duplicate field names
    pub fn new(notetype: impl Into<String>, fields: Vec<Field>) -> Result<Self> {
        let record = Self {
            notetype: notetype.into(),
            fields,
        };
        record.validate()?;
        Ok(record)
    }

    /// Build a record from `(name, value)` pairs
    pub fn from_pairs<N, V>(notetype: &str, pairs: impl IntoIterator<Item = (N, V)>) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| Field::new(name, value))
            .collect();
        Self::new(notetype, fields)
    }

    /// Check that field names are unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(StashError::Other(format!(
                    "duplicate field '{}' on note type '{}'",
                    field.name, self.notetype
                )));
            }
        }
        Ok(())
    }
}

impl FieldAccess for Record {
    fn schema_name(&self) -> &str {
        &self.notetype
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| StashError::FieldNotFound {
                field: name.to_string(),
            })?;
        field.value = value;
        Ok(())
    }
}
