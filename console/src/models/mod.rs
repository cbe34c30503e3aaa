//! Strongly typed resource rows and drafts.
//!
//! Purpose: define the tabular entities each admin screen manages, with
//! serde matching the API's JSON field names, the per-resource search
//! fields, and the draft validation each create/edit form applies before
//! dispatch. Keep rows immutable values; the controller replaces or merges
//! them, never edits fields ad hoc.

pub mod daily;
pub mod partner;
pub mod plan;
pub mod recommendation;
pub mod relationship;
pub mod subscription;
pub mod weekly;

pub use self::daily::{
    AnswerAuthor, AnswerQuestion, DailyAnswer, DailyAnswerDraft, DailyQuestion, DailyQuestionDraft,
    DailyRating,
};
pub use self::partner::{Partner, PartnerDraft};
pub use self::plan::{Plan, PlanDraft};
pub use self::recommendation::{Recommendation, RecommendationDraft};
pub use self::relationship::RelationshipProgress;
pub use self::subscription::{PlanSummary, Subscriber, Subscription};
pub use self::weekly::{
    QuestionStatus, WeeklyAnswer, WeeklyQuestion, WeeklyQuestionDraft, WeeklyRating,
};
