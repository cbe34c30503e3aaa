//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the controller expects to interact with its driven
//! collaborators: the REST API, the notification surface, and the
//! confirmation dialog. Each trait exposes strongly typed errors so adapters
//! map their failures into predictable [`ResourceError`] variants.
//!
//! [`ResourceError`]: crate::domain::ResourceError

mod confirmation;
mod notifier;
mod resource_client;

#[cfg(test)]
pub use confirmation::MockConfirmationGate;
pub use confirmation::{ConfirmationGate, FixtureConfirmationGate};
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{FixtureNotifier, Notifier};
pub use resource_client::{MutationOutcome, ResourceClient, RowId};
