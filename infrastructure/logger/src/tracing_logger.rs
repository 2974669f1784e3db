use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every domain message is emitted under, usable in `RUST_LOG`.
pub const LOG_TARGET: &str = "shopping_list";

/// Forwards domain log lines to the `tracing` subscriber installed by the binary.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
