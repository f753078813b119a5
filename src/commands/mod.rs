//! CLI commands for fieldstash

pub mod backup;
pub mod dispatch;
pub mod inspect;
pub mod notify;
pub mod outcome;
pub mod record_file;
pub mod restore;
