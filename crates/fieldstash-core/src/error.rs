//! Error types and exit codes for fieldstash
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, note type not enabled)
//! - 3: Data error (missing cache field, corrupt payload, unreadable record)
//!
//! Silent no-ops (nothing to back up, empty cache) are not errors; they are
//! reported through [`crate::stash::Outcome`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the fieldstash binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error (2)
    Usage = 2,
    /// Data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during backup and restore
#[derive(Error, Debug)]
pub enum StashError {
    // User-facing (exit code 2)
    #[error(
        "note type '{schema}' is not enabled for backup/restore (enabled: {})",
        .enabled.join(", ")
    )]
    UnsupportedSchema { schema: String, enabled: Vec<String> },

    // Data errors (exit code 3)
    #[error("note type '{schema}' has no '{field}' field")]
    MissingCacheField { schema: String, field: String },

    #[error("corrupt payload: {reason}")]
    CorruptPayload { reason: String },

    #[error("invalid record {path:?}: {reason}")]
    InvalidRecord { path: PathBuf, reason: String },

    // Unexpected failures (exit code 1)
    #[error("field not found on note: {field}")]
    FieldNotFound { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl StashError {
    /// Create an error for a cache value that cannot be decoded
    pub fn corrupt(reason: impl std::fmt::Display) -> Self {
        StashError::CorruptPayload {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a note type outside the enabled list
    pub fn unsupported_schema(schema: &str, enabled: &[String]) -> Self {
        StashError::UnsupportedSchema {
            schema: schema.to_string(),
            enabled: enabled.to_vec(),
        }
    }

    /// Create an error for a note type without the configured cache field
    pub fn missing_cache_field(schema: &str, field: &str) -> Self {
        StashError::MissingCacheField {
            schema: schema.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an error for a failed operation with its root cause
    pub fn unexpected(operation: &str, error: impl std::fmt::Display) -> Self {
        StashError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a record file that does not describe a valid note
    pub fn invalid_record(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        StashError::InvalidRecord {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error should be shown to the user rather than only logged.
    ///
    /// Only an unsupported note type qualifies: the user picked the wrong note
    /// and can correct it right away. Everything else stays out of the way of
    /// editing and goes to the log.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, StashError::UnsupportedSchema { .. })
    }

    /// Whether the error stays off the command line.
    ///
    /// An unsupported note type has already gone through the notifier. A
    /// missing cache field or a corrupt payload is only logged. Anything else
    /// comes from the surrounding glue and is printed.
    pub fn is_silent(&self) -> bool {
        self.is_user_facing()
            || matches!(
                self,
                StashError::MissingCacheField { .. } | StashError::CorruptPayload { .. }
            )
    }

    /// Whether the error is outside the expected taxonomy
    pub fn is_unexpected(&self) -> bool {
        self.exit_code() == ExitCode::Failure
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StashError::UnsupportedSchema { .. } => ExitCode::Usage,

            StashError::MissingCacheField { .. }
            | StashError::CorruptPayload { .. }
            | StashError::InvalidRecord { .. } => ExitCode::Data,

            StashError::FieldNotFound { .. }
            | StashError::Io(_)
            | StashError::Json(_)
            | StashError::Toml(_)
            | StashError::FailedOperation { .. }
            | StashError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            StashError::UnsupportedSchema { .. } => "unsupported_schema",
            StashError::MissingCacheField { .. } => "missing_cache_field",
            StashError::CorruptPayload { .. } => "corrupt_payload",
            StashError::InvalidRecord { .. } => "invalid_record",
            StashError::FieldNotFound { .. } => "field_not_found",
            StashError::Io(_) => "io_error",
            StashError::Json(_) => "json_error",
            StashError::Toml(_) => "toml_error",
            StashError::FailedOperation { .. } => "failed_operation",
            StashError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let StashError::UnsupportedSchema { schema, enabled } = self {
            error_obj["schema"] = serde_json::json!(schema);
            error_obj["enabled"] = serde_json::json!(enabled);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for fieldstash operations
pub type Result<T> = std::result::Result<T, StashError>;
