//! Modal dialog state for create/edit screens.
//!
//! The original screens tracked modal visibility as a boolean next to a
//! mutable "current item" reference, which let a stale edit target leak into
//! a subsequent create. A tagged variant makes that impossible: the edit
//! target exists only while the dialog is in the editing state.

/// Per-screen create/edit dialog state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState<R> {
    /// No dialog is showing.
    #[default]
    Closed,
    /// The create form is open with a fresh draft.
    Creating,
    /// The edit form is open for the captured row.
    Editing(R),
}

impl<R> DialogState<R> {
    /// Open the create form, discarding any previous edit target.
    pub fn open_create(&mut self) {
        *self = Self::Creating;
    }

    /// Open the edit form for one row.
    pub fn open_edit(&mut self, row: R) {
        *self = Self::Editing(row);
    }

    /// Dismiss whichever form is showing.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether any dialog is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The row being edited, if the edit form is open.
    #[must_use]
    pub fn editing(&self) -> Option<&R> {
        match self {
            Self::Editing(row) => Some(row),
            Self::Closed | Self::Creating => None,
        }
    }
}
