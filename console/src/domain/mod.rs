//! Domain primitives and the list-management controller.
//!
//! Purpose: own the fetch/search/paginate/mutate cycle for one tabular
//! resource and define the ports through which the controller reaches the
//! API, the notification surface, and the confirmation dialog. Keep types
//! strongly typed and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - [`ListController`] — the generic controller every screen instantiates.
//! - [`TableRow`] / [`RowDraft`] — per-resource row and draft contracts.
//! - [`DialogState`] — explicit create/edit modal state per screen.
//! - [`SessionContext`] — explicit session identity, replacing ambient
//!   browser storage in the original console.
//! - [`ResourceError`] — the shared error taxonomy.

pub mod dialog;
pub mod error;
pub mod list_controller;
pub mod ports;
pub mod row;
pub mod session;

pub use self::dialog::DialogState;
pub use self::error::ResourceError;
pub use self::list_controller::{
    DeletePrompt, ListController, ListSettings, LoadStatus, PageView, RemovalOutcome,
};
pub use self::row::{contains_ci, NoDraft, RowDraft, TableRow};
pub use self::session::{SessionContext, SessionValidationError, UserId};
