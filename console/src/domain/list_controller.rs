//! Generic fetch/search/paginate/mutate controller.
//!
//! One [`ListController`] owns the table state for one mounted screen: the
//! last successfully fetched list, the free-text query, and the pagination
//! cursor. Filtering and paging are derived views recomputed from that state
//! on demand, never cached. Mutations go through the [`ResourceClient`] port
//! and are reflected locally only after the API confirms them.
//!
//! Refresh policy is asymmetric on purpose, matching the console it
//! replaces: a successful create refetches the full list, while update and
//! delete patch `items` in place without another round trip.
//!
//! Operations take `&mut self`, so one controller never races against
//! itself. Separate controllers share nothing. Requests are single-attempt;
//! there is no retry, backoff, or cancellation, and a refresh that lands
//! after newer state simply overwrites it (last-wins, a known limitation
//! carried over from the source).

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{ConfirmationGate, Notifier, ResourceClient, RowId};
use crate::domain::row::{RowDraft, TableRow};
use crate::domain::ResourceError;

const DEFAULT_PAGE_SIZE: usize = 10;

/// Fetch state of the controller's list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No fetch has been attempted yet.
    #[default]
    Idle,
    /// A list fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; `items` still holds the previous good list.
    Error(String),
}

/// Title and body shown by the confirmation gate before a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// Dialog title.
    pub title: String,
    /// Dialog body text.
    pub text: String,
}

impl DeletePrompt {
    /// Prompt with screen-specific wording.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Default for DeletePrompt {
    fn default() -> Self {
        Self::new("Are you sure?", "You won't be able to recover this entry!")
    }
}

/// Per-screen controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    /// Rows per page; normalised to at least 1.
    pub page_size: usize,
    /// Whether a failed list fetch is surfaced through the notifier.
    ///
    /// Some screens toast on fetch failure, others only log; both behaviours
    /// exist in the console this replaces, so the choice is per screen.
    pub notify_on_list_error: bool,
    /// Wording for the delete confirmation.
    pub delete_prompt: DeletePrompt,
}

impl ListSettings {
    /// Override the rows-per-page default.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Surface list-fetch failures through the notifier.
    #[must_use]
    pub fn with_notify_on_list_error(mut self, notify: bool) -> Self {
        self.notify_on_list_error = notify;
        self
    }

    /// Override the delete confirmation wording.
    #[must_use]
    pub fn with_delete_prompt(mut self, prompt: DeletePrompt) -> Self {
        self.delete_prompt = prompt;
        self
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            notify_on_list_error: false,
            delete_prompt: DeletePrompt::default(),
        }
    }
}

/// Read-only view of the current page, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<R> {
    /// Rows visible on the current page.
    pub rows: Vec<R>,
    /// Clamped 1-based page index.
    pub page: usize,
    /// Total pages for the current filter; at least 1.
    pub total_pages: usize,
    /// Rows matching the current query.
    pub filtered_count: usize,
    /// Rows in the full fetched list.
    pub total_count: usize,
}

/// Result of a [`ListController::remove`] call that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The user declined the confirmation; nothing was dispatched.
    Declined,
    /// The API confirmed the delete and the row was dropped locally.
    Removed,
}

/// Fetch/search/paginate/mutate engine for one tabular resource.
///
/// ## Invariants
/// - `page` stays within `[1, max(1, ceil(filtered / page_size))]` after
///   every operation.
/// - `items` only changes on a successful fetch, update, or delete.
/// - The filtered sequence is a pure function of `items` and `query`.
pub struct ListController<C, N, G>
where
    C: ResourceClient,
    N: Notifier,
    G: ConfirmationGate,
{
    client: Arc<C>,
    notifier: Arc<N>,
    gate: Arc<G>,
    settings: ListSettings,
    items: Vec<C::Row>,
    query: String,
    page: usize,
    page_size: usize,
    status: LoadStatus,
    busy: bool,
}

impl<C, N, G> ListController<C, N, G>
where
    C: ResourceClient,
    N: Notifier,
    G: ConfirmationGate,
{
    /// Build a controller without fetching anything yet.
    #[must_use]
    pub fn new(client: Arc<C>, notifier: Arc<N>, gate: Arc<G>, settings: ListSettings) -> Self {
        let page_size = settings.page_size.max(1);
        Self {
            client,
            notifier,
            gate,
            settings,
            items: Vec::new(),
            query: String::new(),
            page: 1,
            page_size,
            status: LoadStatus::Idle,
            busy: false,
        }
    }

    /// Build a controller and run the initial fetch, as a screen does on
    /// mount.
    pub async fn mount(
        client: Arc<C>,
        notifier: Arc<N>,
        gate: Arc<G>,
        settings: ListSettings,
    ) -> Self {
        let mut controller = Self::new(client, notifier, gate, settings);
        controller.refresh().await;
        controller
    }

    /// The last successfully fetched list.
    #[must_use]
    pub fn items(&self) -> &[C::Row] {
        &self.items
    }

    /// Current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page index.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch state of the list.
    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether a mutation is in flight.
    ///
    /// Advisory only: the rendering layer uses it to disable submit
    /// controls, but nothing prevents further calls while it is set.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Recompute the visible page from the current state.
    #[must_use]
    pub fn view(&self) -> PageView<C::Row> {
        let filtered: Vec<&C::Row> = self
            .items
            .iter()
            .filter(|row| row.matches(&self.query))
            .collect();
        let filtered_count = filtered.len();
        let total_pages = Self::page_count(filtered_count, self.page_size);
        let page = self.page.clamp(1, total_pages);
        let rows = filtered
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();
        PageView {
            rows,
            page,
            total_pages,
            filtered_count,
            total_count: self.items.len(),
        }
    }

    /// Refetch the full list.
    ///
    /// On failure the previous list stays visible (stale-but-visible); the
    /// failure reaches the notifier only when the screen opted in via
    /// [`ListSettings::notify_on_list_error`], and is logged either way.
    pub async fn refresh(&mut self) {
        self.status = LoadStatus::Loading;
        match self.client.list().await {
            Ok(rows) => {
                debug!(rows = rows.len(), "list refreshed");
                self.items = rows;
                self.reclamp_page();
                self.status = LoadStatus::Ready;
            }
            Err(error) => {
                warn!(%error, "list refresh failed");
                let message = error.user_message();
                if self.settings.notify_on_list_error {
                    self.notifier.error(&message);
                }
                self.status = LoadStatus::Error(message);
            }
        }
    }

    /// Replace the search query and jump back to the first page.
    ///
    /// Purely local: search always runs over the already-fetched list.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Navigate to a page, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Change the rows-per-page and jump back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Create a row from a draft, then refetch the full list.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Validation`] when the draft fails its pre-flight
    /// check (nothing is dispatched), [`ResourceError::Unsupported`] when the
    /// resource has no create endpoint, or the adapter failure otherwise.
    /// Every failure is also surfaced through the notifier.
    pub async fn create(&mut self, draft: &C::Draft) -> Result<(), ResourceError> {
        if let Err(error) = draft.validate() {
            self.notifier.error(&error.user_message());
            return Err(error);
        }

        self.busy = true;
        let result = self.client.create(draft).await;
        self.busy = false;

        match result {
            Ok(outcome) => {
                let message = outcome
                    .message
                    .unwrap_or_else(|| "Created successfully".to_owned());
                self.notifier.success(&message);
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "create failed");
                self.notifier.error(&error.user_message());
                Err(error)
            }
        }
    }

    /// Update the row with the given id from a draft, patching it in place.
    ///
    /// When the API echoes the stored entity that value replaces the local
    /// row; when it only acknowledges, the draft is merged into the existing
    /// row instead. Other rows keep their identity and order.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ListController::create`]; on failure `items` is
    /// left untouched.
    pub async fn update(&mut self, id: RowId<C>, draft: &C::Draft) -> Result<(), ResourceError> {
        if let Err(error) = draft.validate() {
            self.notifier.error(&error.user_message());
            return Err(error);
        }

        self.busy = true;
        let result = self.client.update(id, draft).await;
        self.busy = false;

        match result {
            Ok(outcome) => {
                if let Some(slot) = self.items.iter_mut().find(|row| row.id() == id) {
                    match outcome.row {
                        Some(row) => *slot = row,
                        None => draft.merge_into(slot),
                    }
                }
                let message = outcome
                    .message
                    .unwrap_or_else(|| "Updated successfully".to_owned());
                self.notifier.success(&message);
                Ok(())
            }
            Err(error) => {
                warn!(%error, id = %id, "update failed");
                self.notifier.error(&error.user_message());
                Err(error)
            }
        }
    }

    /// Delete the row with the given id after explicit user confirmation.
    ///
    /// A declined confirmation is a silent no-op. On success the matching
    /// entry is dropped from the local list without a refetch.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Unsupported`] when the resource has no delete
    /// endpoint, or the adapter failure otherwise; `items` is left untouched
    /// and the failure is surfaced through the notifier.
    pub async fn remove(&mut self, id: RowId<C>) -> Result<RemovalOutcome, ResourceError> {
        let prompt = self.settings.delete_prompt.clone();
        if !self.gate.confirm(&prompt.title, &prompt.text).await {
            debug!(id = %id, "delete declined");
            return Ok(RemovalOutcome::Declined);
        }

        self.busy = true;
        let result = self.client.delete(id).await;
        self.busy = false;

        match result {
            Ok(message) => {
                self.items.retain(|row| row.id() != id);
                self.reclamp_page();
                self.notifier
                    .success(message.as_deref().unwrap_or("Deleted successfully"));
                Ok(RemovalOutcome::Removed)
            }
            Err(error) => {
                warn!(%error, id = %id, "delete failed");
                self.notifier.error(&error.user_message());
                Err(error)
            }
        }
    }

    fn total_pages(&self) -> usize {
        let filtered = self
            .items
            .iter()
            .filter(|row| row.matches(&self.query))
            .count();
        Self::page_count(filtered, self.page_size)
    }

    fn reclamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    fn page_count(filtered: usize, page_size: usize) -> usize {
        filtered.div_ceil(page_size).max(1)
    }
}
