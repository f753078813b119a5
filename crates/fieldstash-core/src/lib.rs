//! Fieldstash Core Library
//!
//! Moves the contents of a note's fields into a single encoded cache field
//! and restores them later. The pure pieces are [`select`], [`encode`] and
//! [`decode`]; [`stash`] wires them to a host through the traits in [`host`].

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod host;
pub mod logging;
pub mod payload;
pub mod record;
pub mod select;
pub mod stash;

pub use decode::{decode, decode_items};
pub use encode::{encode, EncodedBackup};
pub use error::{Result, StashError};
pub use payload::BackupItem;
pub use record::{Field, Record};
pub use select::select;
pub use stash::{backup_record, restore_record, run_backup, run_restore, Outcome};
