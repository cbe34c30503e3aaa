//! Port gating destructive actions behind an explicit user confirmation.
//!
//! Deletion must pass through this gate before any endpoint is dispatched.
//! Decoupling the gate from any concrete dialog keeps the controller
//! testable with a fake that always accepts or always declines.

use async_trait::async_trait;

/// Asynchronous yes/no confirmation collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Ask the user to confirm; resolves once they answer.
    async fn confirm(&self, title: &str, text: &str) -> bool;
}

/// Gate with a fixed decision, for tests and headless use.
#[derive(Debug, Clone, Copy)]
pub struct FixtureConfirmationGate {
    decision: bool,
}

impl FixtureConfirmationGate {
    /// Gate that confirms every prompt.
    #[must_use]
    pub fn accepting() -> Self {
        Self { decision: true }
    }

    /// Gate that declines every prompt.
    #[must_use]
    pub fn declining() -> Self {
        Self { decision: false }
    }
}

#[async_trait]
impl ConfirmationGate for FixtureConfirmationGate {
    async fn confirm(&self, _title: &str, _text: &str) -> bool {
        self.decision
    }
}
