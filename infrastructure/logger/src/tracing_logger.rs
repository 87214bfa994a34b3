use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case logs to `tracing` under the `prescriptions` target,
/// so `RUST_LOG=prescriptions=debug` narrows output to the translation flow.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "prescriptions", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "prescriptions", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "prescriptions", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "prescriptions", "{}", message);
    }
}

