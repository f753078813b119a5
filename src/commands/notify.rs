//! User notifications from the command line

use fieldstash_core::host::Notify;

/// Shows user-facing messages on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notify for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
