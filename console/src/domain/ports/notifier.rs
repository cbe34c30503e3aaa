//! Port for user-facing success and failure notifications.
//!
//! Screens present these differently (floating toasts, inline banners,
//! blocking alerts); the controller only needs the two capabilities.

/// Notification sink for operation outcomes.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Announce a successful operation.
    fn success(&self, message: &str);

    /// Announce a failed operation.
    fn error(&self, message: &str);
}

/// Notifier that discards everything.
///
/// Use in tests where notification behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotifier;

impl Notifier for FixtureNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
