//! Tracing-backed notifier.
//!
//! Some screens in the original console never toast; they only write to the
//! developer console. This adapter is their equivalent: outcomes become
//! structured log events and nothing reaches the user directly.

use tracing::{info, warn};

use crate::domain::ports::Notifier;

/// Notifier that logs outcomes instead of presenting them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(message, "operation succeeded");
    }

    fn error(&self, message: &str) {
        warn!(message, "operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_notifier_accepts_both_channels() {
        let notifier = TracingNotifier;
        notifier.success("saved");
        notifier.error("failed");
    }
}
