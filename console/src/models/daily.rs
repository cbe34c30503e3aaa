//! Daily check-in resources: questions, answers, and ratings.
//!
//! Daily check-in questions share the shape and lifecycle of their weekly
//! counterparts but live behind their own endpoints, so they keep their own
//! row type. Answers are editable in place (the only answer list that is);
//! ratings are delete-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, ResourceError, RowDraft, TableRow};
use crate::models::weekly::QuestionStatus;
use crate::outbound::rest::FormPayload;

/// One daily check-in question row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuestion {
    /// Stable row identifier.
    pub id: i64,
    /// Question text shown to couples.
    #[serde(rename = "question")]
    pub text: String,
    /// Publication state.
    pub status: QuestionStatus,
}

impl TableRow for DailyQuestion {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.text, query)
    }
}

/// Draft for creating or editing a daily check-in question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuestionDraft {
    /// Question text; must not be blank.
    pub text: String,
    /// Publication state.
    pub status: QuestionStatus,
}

impl RowDraft<DailyQuestion> for DailyQuestionDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.text.trim().is_empty() {
            return Err(ResourceError::validation("Question cannot be empty"));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut DailyQuestion) {
        row.text = self.text.trim().to_owned();
        row.status = self.status;
    }
}

impl FormPayload for DailyQuestionDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("question".to_owned(), self.text.trim().to_owned()),
            ("status".to_owned(), self.status.as_str().to_owned()),
        ]
    }
}

/// Question the answer belongs to, as embedded in an answer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerQuestion {
    /// Question text.
    pub question: String,
}

/// Answering user, as embedded in an answer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerAuthor {
    /// Given name.
    pub first_name: String,
}

/// One submitted daily answer.
///
/// The embedded question and user are optional: the API omits them for
/// answers whose parent records were removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAnswer {
    /// Stable row identifier.
    pub id: i64,
    /// Answer text.
    pub answer: String,
    /// Question the answer belongs to.
    #[serde(default)]
    pub question: Option<AnswerQuestion>,
    /// Answering user.
    #[serde(default)]
    pub user: Option<AnswerAuthor>,
}

impl TableRow for DailyAnswer {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.answer, query)
            || self
                .question
                .as_ref()
                .is_some_and(|question| contains_ci(&question.question, query))
            || self
                .user
                .as_ref()
                .is_some_and(|user| contains_ci(&user.first_name, query))
    }
}

/// Draft for editing a daily answer's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAnswerDraft {
    /// Replacement answer text; must not be blank.
    pub answer: String,
}

impl RowDraft<DailyAnswer> for DailyAnswerDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.answer.trim().is_empty() {
            return Err(ResourceError::validation("Answer cannot be empty"));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut DailyAnswer) {
        row.answer = self.answer.trim().to_owned();
    }
}

impl FormPayload for DailyAnswerDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        vec![("answer".to_owned(), self.answer.trim().to_owned())]
    }
}

/// One submitted daily rating (read-only apart from deletion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRating {
    /// Stable row identifier.
    pub id: i64,
    /// Display name of the rating user.
    pub user_name: String,
    /// Rating value on the app's scale.
    pub rating: u8,
    /// Free-text feedback accompanying the rating.
    #[serde(default)]
    pub feedback: String,
    /// Submission time, when the API includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TableRow for DailyRating {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.user_name, query) || contains_ci(&self.feedback, query)
    }
}
