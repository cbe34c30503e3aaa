//! Per-resource screen wiring.
//!
//! A screen is one mounted admin table: a [`ListController`] bound to its
//! resource's route table plus the modal [`DialogState`] for its create/edit
//! forms. [`ScreenContext`] carries the collaborators every screen shares —
//! one transport, one notifier, one confirmation gate — and exposes a
//! constructor per resource.
//!
//! Per-screen quirks of the original console are preserved here: which
//! screens toast on a failed list fetch, which pin a smaller page size, and
//! the wording of each delete confirmation. The `weakly`/`recomendation`/
//! `relationship-progres` spellings are the live API paths.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ConsoleSettings;
use crate::domain::ports::{ConfirmationGate, Notifier, ResourceClient};
use crate::domain::{
    DeletePrompt, DialogState, ListController, ListSettings, RowDraft, SessionContext, TableRow,
};
use crate::models::{
    DailyAnswer, DailyAnswerDraft, DailyQuestion, DailyQuestionDraft, DailyRating, Partner,
    PartnerDraft, Plan, PlanDraft, Recommendation, RecommendationDraft, RelationshipProgress,
    Subscription, WeeklyAnswer, WeeklyQuestion, WeeklyQuestionDraft, WeeklyRating,
};
use crate::domain::NoDraft;
use crate::outbound::rest::{FormPayload, ListMethod, RestResourceClient, RestTransport, Routes};

/// Errors raised while assembling a screen context.
#[derive(Debug, Error)]
pub enum ScreenSetupError {
    /// The configured API base URL does not parse.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// One mounted admin table: list state plus its modal dialog state.
pub struct Screen<C, N, G>
where
    C: ResourceClient,
    N: Notifier,
    G: ConfirmationGate,
{
    /// Fetch/search/paginate/mutate state.
    pub list: ListController<C, N, G>,
    /// Create/edit dialog state.
    pub dialog: DialogState<C::Row>,
}

/// Screen built on the shared REST adapter.
pub type RestScreen<R, D, N, G> = Screen<RestResourceClient<R, D>, N, G>;

/// Shared collaborators for every screen of one console instance.
#[derive(Debug)]
pub struct ScreenContext<N, G> {
    transport: Arc<RestTransport>,
    notifier: Arc<N>,
    gate: Arc<G>,
    settings: ConsoleSettings,
}

impl<N, G> ScreenContext<N, G>
where
    N: Notifier,
    G: ConfirmationGate,
{
    /// Assemble the shared transport and collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenSetupError`] when the configured base URL is invalid
    /// or the HTTP client cannot be built.
    pub fn new(
        settings: ConsoleSettings,
        session: SessionContext,
        notifier: Arc<N>,
        gate: Arc<G>,
    ) -> Result<Self, ScreenSetupError> {
        let transport = RestTransport::new(
            settings.api_base_url()?,
            settings.request_timeout(),
            session,
        )?;
        Ok(Self {
            transport: Arc::new(transport),
            notifier,
            gate,
            settings,
        })
    }

    /// Weekly questions: full CRUD, toasts on fetch failure.
    pub async fn weekly_questions(&self) -> RestScreen<WeeklyQuestion, WeeklyQuestionDraft, N, G> {
        let routes = Routes::list("weakly-questions-list", ListMethod::PostForm)
            .with_create("weakly-question")
            .with_update("weakly-question-update")
            .with_delete("weakly-question-delete");
        let settings = self
            .list_settings()
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Confirm deletion",
                "Do you want to delete this question?",
            ));
        self.mount(routes, settings).await
    }

    /// Weekly answers: read-only apart from deletion; fetch failures only log.
    pub async fn weekly_answers(&self) -> RestScreen<WeeklyAnswer, NoDraft, N, G> {
        let routes = Routes::list("weakly-answer-list", ListMethod::Get)
            .with_delete("weakly-answer-delete");
        let settings = self.list_settings().with_delete_prompt(DeletePrompt::new(
            "Are you sure?",
            "You will not be able to recover this answer!",
        ));
        self.mount(routes, settings).await
    }

    /// Weekly ratings: read-only apart from deletion, five rows per page.
    pub async fn weekly_ratings(&self) -> RestScreen<WeeklyRating, NoDraft, N, G> {
        let routes = Routes::list("weakly-all-rating-list", ListMethod::PostJson)
            .with_delete("weakly-rating-delete");
        let settings = self
            .list_settings()
            .with_page_size(5)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "Do you really want to delete this rating?",
            ));
        self.mount(routes, settings).await
    }

    /// Plans: full CRUD with the `plan_id` field convention.
    pub async fn plans(&self) -> RestScreen<Plan, PlanDraft, N, G> {
        let routes = Routes::list("plans-list", ListMethod::Get)
            .with_create("plans-create")
            .with_update("plans-update")
            .with_delete("plans-delete")
            .with_id_field("plan_id");
        let settings = self
            .list_settings()
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "You won't be able to recover this plan!",
            ));
        self.mount(routes, settings).await
    }

    /// Subscriptions: delete-only, five rows per page.
    pub async fn subscriptions(&self) -> RestScreen<Subscription, NoDraft, N, G> {
        let routes = Routes::list("purchase-admin-list", ListMethod::PostJson)
            .with_delete("subscription-delete");
        let settings = self
            .list_settings()
            .with_page_size(5)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "You won't be able to recover this subscription!",
            ));
        self.mount(routes, settings).await
    }

    /// Partner profiles: list, profile update, and account deletion.
    ///
    /// The partner screen edits the user's profile record, so update goes
    /// through `profile-update` and both mutations carry the row id as
    /// `user_id`.
    pub async fn partners(&self) -> RestScreen<Partner, PartnerDraft, N, G> {
        let routes = Routes::list("partner-list", ListMethod::Get)
            .with_update("profile-update")
            .with_delete("user-delete")
            .with_id_field("user_id");
        let settings = self
            .list_settings()
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "This user will be permanently deleted!",
            ));
        self.mount(routes, settings).await
    }

    /// Recommendation cards: full CRUD, toasts on fetch failure.
    pub async fn recommendations(&self) -> RestScreen<Recommendation, RecommendationDraft, N, G> {
        let routes = Routes::list("recomendation-all", ListMethod::Get)
            .with_create("recomendation-create")
            .with_update("recomendation-update")
            .with_delete("recomendation-delete");
        let settings = self.list_settings().with_notify_on_list_error(true);
        self.mount(routes, settings).await
    }

    /// Daily check-in questions: full CRUD, toasts on fetch failure.
    pub async fn daily_questions(&self) -> RestScreen<DailyQuestion, DailyQuestionDraft, N, G> {
        let routes = Routes::list("questions", ListMethod::Get)
            .with_create("question-create")
            .with_update("question-update")
            .with_delete("question-delete");
        let settings = self
            .list_settings()
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "Do you want to delete this question?",
            ));
        self.mount(routes, settings).await
    }

    /// Daily answers: the one answer list that is editable in place.
    pub async fn daily_answers(&self) -> RestScreen<DailyAnswer, DailyAnswerDraft, N, G> {
        let routes = Routes::list("answer-list", ListMethod::Get)
            .with_update("answer-update")
            .with_delete("answer-delete");
        let settings = self
            .list_settings()
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "You won't be able to revert this!",
            ));
        self.mount(routes, settings).await
    }

    /// Daily ratings: read-only apart from deletion, five rows per page.
    pub async fn daily_ratings(&self) -> RestScreen<DailyRating, NoDraft, N, G> {
        let routes = Routes::list("daily-all-rating-list", ListMethod::PostJson)
            .with_delete("daily-rating-delete");
        let settings = self
            .list_settings()
            .with_page_size(5)
            .with_notify_on_list_error(true)
            .with_delete_prompt(DeletePrompt::new(
                "Are you sure?",
                "You won't be able to revert this!",
            ));
        self.mount(routes, settings).await
    }

    /// Relationship progress: fully read-only; fetch failures render inline.
    ///
    /// The `relationship-progres` spelling is the live API path.
    pub async fn relationship_progress(&self) -> RestScreen<RelationshipProgress, NoDraft, N, G> {
        let routes = Routes::list("relationship-progres-list", ListMethod::Get);
        self.mount(routes, self.list_settings()).await
    }

    fn list_settings(&self) -> ListSettings {
        ListSettings::default()
            .with_page_size(self.settings.page_size())
            .with_notify_on_list_error(self.settings.notify_on_list_error)
    }

    async fn mount<R, D>(&self, routes: Routes, settings: ListSettings) -> RestScreen<R, D, N, G>
    where
        R: TableRow + Clone + DeserializeOwned + Send + Sync + 'static,
        D: RowDraft<R> + FormPayload + 'static,
    {
        let client = Arc::new(RestResourceClient::new(Arc::clone(&self.transport), routes));
        let list = ListController::mount(
            client,
            Arc::clone(&self.notifier),
            Arc::clone(&self.gate),
            settings,
        )
        .await;
        Screen {
            list,
            dialog: DialogState::Closed,
        }
    }
}
