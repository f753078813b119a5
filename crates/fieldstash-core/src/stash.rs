//! Backup and restore flows over a single record
//!
//! [`backup_record`] and [`restore_record`] do the guarded work: note type
//! check, cache field check, select/encode or decode, then the writes. All
//! reading and decoding happens before the first write, and a failed write
//! rolls back the ones already made, so a record is never left half-modified.
//!
//! [`run_backup`] and [`run_restore`] add the host policy on top: tell the
//! user about an unsupported note type, log everything else, and persist the
//! record after a change unless it is still being added.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, error, warn};

use crate::decode::decode;
use crate::encode::encode;
use crate::error::{Result, StashError};
use crate::host::{ConfigProvider, FieldAccess, Notify, Persist};
use crate::select::select;
use crate::{bail_unsupported, trace_time};

/// What a backup or restore did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fields were captured into the cache field and blanked
    BackedUp { fields: Vec<String> },
    /// Fields were written back and the cache field cleared
    Restored { fields: Vec<String> },
    /// Every eligible field was empty; nothing changed
    NothingToBackup,
    /// The cache field was empty; nothing changed
    EmptyCache,
}

impl Outcome {
    /// Whether the record was modified
    pub fn mutated(&self) -> bool {
        matches!(self, Outcome::BackedUp { .. } | Outcome::Restored { .. })
    }

    /// Fields written by the operation
    pub fn fields(&self) -> &[String] {
        match self {
            Outcome::BackedUp { fields } | Outcome::Restored { fields } => fields,
            Outcome::NothingToBackup | Outcome::EmptyCache => &[],
        }
    }
}

/// Message shown when backup/restore is used on a note type that is not enabled
pub fn unsupported_message(schema: &str, enabled: &[String]) -> String {
    format!(
        "This note type ('{}') is not enabled for backup/restore.\n\n\
         Please use one of the following note types:\n- {}",
        schema,
        enabled.join(", ")
    )
}

fn check_record<R, C>(record: &R, config: &C) -> Result<()>
where
    R: FieldAccess + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let schema = record.schema_name();
    if !config.is_enabled(schema) {
        bail_unsupported!(schema, config.enabled_notetypes());
    }
    if !record.has_field(config.cache_field()) {
        return Err(StashError::missing_cache_field(
            schema,
            config.cache_field(),
        ));
    }
    Ok(())
}

fn owned_names<R: FieldAccess + ?Sized>(record: &R) -> Vec<String> {
    record
        .field_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Back up a record's eligible fields into its cache field.
///
/// The cache field is always treated as ignored, whether or not the
/// configured ignore list names it.
pub fn backup_record<R, C>(record: &mut R, config: &C) -> Result<Outcome>
where
    R: FieldAccess + ?Sized,
    C: ConfigProvider + ?Sized,
{
    check_record(&*record, config)?;

    let cache_field = config.cache_field();
    let names = owned_names(&*record);
    let mut ignored = config.ignore_set();
    ignored.insert(cache_field.to_lowercase());
    let eligible = select(&names, &ignored, config.title_index());

    let Some(encoded) = encode(&*record, &eligible)? else {
        return Ok(Outcome::NothingToBackup);
    };

    let mut writes = Vec::with_capacity(encoded.cleared_fields.len() + 1);
    writes.push((cache_field.to_string(), encoded.cache_value()));
    writes.extend(
        encoded
            .cleared_fields
            .iter()
            .map(|field| (field.clone(), String::new())),
    );
    apply_writes(record, writes)?;

    debug!(
        schema = record.schema_name(),
        fields = ?encoded.cleared_fields,
        "backed up fields"
    );
    Ok(Outcome::BackedUp {
        fields: encoded.cleared_fields,
    })
}

/// Restore a record's fields from its cache field and clear the cache.
///
/// The title field and the cache field itself are never overwritten.
pub fn restore_record<R, C>(record: &mut R, config: &C) -> Result<Outcome>
where
    R: FieldAccess + ?Sized,
    C: ConfigProvider + ?Sized,
{
    check_record(&*record, config)?;

    let cache_field = config.cache_field();
    let content = record.field(cache_field).unwrap_or_default().to_string();
    if content.trim().is_empty() {
        return Ok(Outcome::EmptyCache);
    }

    let names = owned_names(&*record);
    let valid: HashSet<&str> = names
        .iter()
        .enumerate()
        .filter(|(i, name)| *i != config.title_index() && name.as_str() != cache_field)
        .map(|(_, name)| name.as_str())
        .collect();

    let assignments = decode(&content, &valid)?;
    let fields: Vec<String> = assignments.iter().map(|(f, _)| f.clone()).collect();

    let mut writes = assignments;
    writes.push((cache_field.to_string(), String::new()));
    apply_writes(record, writes)?;

    debug!(schema = record.schema_name(), fields = ?fields, "restored fields");
    Ok(Outcome::Restored { fields })
}

/// Apply field writes in order, undoing earlier ones if a later one fails
fn apply_writes<R>(record: &mut R, writes: Vec<(String, String)>) -> Result<()>
where
    R: FieldAccess + ?Sized,
{
    let mut previous: Vec<(String, String)> = Vec::with_capacity(writes.len());

    for (name, value) in writes {
        let Some(old) = record.field(&name).map(str::to_string) else {
            rollback(record, previous);
            return Err(StashError::FieldNotFound { field: name });
        };
        if let Err(e) = record.set_field(&name, value) {
            rollback(record, previous);
            return Err(e);
        }
        previous.push((name, old));
    }

    Ok(())
}

fn rollback<R>(record: &mut R, previous: Vec<(String, String)>)
where
    R: FieldAccess + ?Sized,
{
    for (name, old) in previous.into_iter().rev() {
        if let Err(e) = record.set_field(&name, old) {
            error!(field = %name, error = %e, "failed to roll back field");
        }
    }
}

/// Log or surface a finished operation according to the error policy
fn report<N>(operation: &str, result: &Result<Outcome>, notifier: &N)
where
    N: Notify + ?Sized,
{
    match result {
        Ok(outcome) => debug!(operation, outcome = ?outcome, "operation finished"),
        Err(StashError::UnsupportedSchema { schema, enabled }) => {
            notifier.notify(&unsupported_message(schema, enabled));
        }
        Err(e @ StashError::MissingCacheField { .. }) => {
            warn!(operation, error = %e, "{} skipped", operation);
        }
        Err(e) => {
            error!(
                operation,
                error_type = e.error_type(),
                error = %e,
                detail = ?e,
                "{} failed",
                operation
            );
        }
    }
}

fn commit<R, P>(record: &R, persister: &mut P, outcome: &Outcome, add_mode: bool) -> Result<()>
where
    R: ?Sized,
    P: Persist<R> + ?Sized,
{
    if outcome.mutated() && !add_mode {
        persister.persist(record)?;
    }
    Ok(())
}

/// Back up a record and apply the host policy.
///
/// `add_mode` marks a record that is still being added and has nothing to
/// persist yet.
pub fn run_backup<R, C, N, P>(
    record: &mut R,
    config: &C,
    notifier: &N,
    persister: &mut P,
    add_mode: bool,
) -> Result<Outcome>
where
    R: FieldAccess + ?Sized,
    C: ConfigProvider + ?Sized,
    N: Notify + ?Sized,
    P: Persist<R> + ?Sized,
{
    let start = Instant::now();
    let result = backup_record(&mut *record, config).and_then(|outcome| {
        commit(&*record, persister, &outcome, add_mode)?;
        Ok(outcome)
    });
    report("backup", &result, notifier);
    trace_time!(start, "run_backup");
    result
}

/// Restore a record and apply the host policy.
pub fn run_restore<R, C, N, P>(
    record: &mut R,
    config: &C,
    notifier: &N,
    persister: &mut P,
    add_mode: bool,
) -> Result<Outcome>
where
    R: FieldAccess + ?Sized,
    C: ConfigProvider + ?Sized,
    N: Notify + ?Sized,
    P: Persist<R> + ?Sized,
{
    let start = Instant::now();
    let result = restore_record(&mut *record, config).and_then(|outcome| {
        commit(&*record, persister, &outcome, add_mode)?;
        Ok(outcome)
    });
    report("restore", &result, notifier);
    trace_time!(start, "run_restore");
    result
}
