//! Row and draft contracts implemented by each tabular resource.

use std::fmt;

use crate::domain::ResourceError;

/// One row of a managed table.
///
/// Rows are plain values fetched from the API. The controller never mutates
/// a row except by replacing it wholesale or merging a confirmed draft.
pub trait TableRow {
    /// Stable, comparable row identifier.
    type Id: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync;

    /// Identifier used to match rows across fetches and mutations.
    fn id(&self) -> Self::Id;

    /// Case-insensitive free-text match over this resource's search fields.
    ///
    /// An empty query matches every row.
    fn matches(&self, query: &str) -> bool;
}

/// A user-edited, not-yet-persisted field set for one row.
pub trait RowDraft<R>: Send + Sync {
    /// Local pre-flight check, run before any endpoint is dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] when a required field is blank
    /// or otherwise unusable, so no network round trip is wasted.
    fn validate(&self) -> Result<(), ResourceError>;

    /// Fold this draft into an existing row.
    ///
    /// Used after a successful update when the API acknowledges without
    /// returning the updated entity.
    fn merge_into(&self, row: &mut R);
}

/// Draft for resources that expose no create or update endpoint.
///
/// Read-only and delete-only screens still need a draft type to satisfy the
/// client contract; this one validates trivially and merges nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDraft;

impl<R> RowDraft<R> for NoDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        Ok(())
    }

    fn merge_into(&self, _row: &mut R) {}
}

/// Case-insensitive substring containment.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
