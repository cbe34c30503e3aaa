//! Weekly reflection resources: questions, answers, and ratings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, ResourceError, RowDraft, TableRow};
use crate::outbound::rest::FormPayload;

/// Publication state of a weekly question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    /// Served to couples this week.
    Active,
    /// Retained but not served.
    Inactive,
}

impl QuestionStatus {
    /// Wire value used in form fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Capitalised for table badges, as the original screen rendered it.
        match self {
            Self::Active => f.write_str("Active"),
            Self::Inactive => f.write_str("Inactive"),
        }
    }
}

/// One weekly question row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyQuestion {
    /// Stable row identifier.
    pub id: i64,
    /// Question text shown to couples.
    #[serde(rename = "question")]
    pub text: String,
    /// Publication state.
    pub status: QuestionStatus,
}

impl TableRow for WeeklyQuestion {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.text, query)
    }
}

/// Draft for creating or editing a weekly question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyQuestionDraft {
    /// Question text; must not be blank.
    pub text: String,
    /// Publication state.
    pub status: QuestionStatus,
}

impl RowDraft<WeeklyQuestion> for WeeklyQuestionDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.text.trim().is_empty() {
            return Err(ResourceError::validation("Question cannot be empty"));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut WeeklyQuestion) {
        row.text = self.text.trim().to_owned();
        row.status = self.status;
    }
}

impl FormPayload for WeeklyQuestionDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("question".to_owned(), self.text.trim().to_owned()),
            ("status".to_owned(), self.status.as_str().to_owned()),
        ]
    }
}

/// One submitted weekly answer (read-only apart from deletion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAnswer {
    /// Stable row identifier.
    pub id: i64,
    /// Question the answer belongs to.
    pub question: String,
    /// Display name of the answering user.
    pub user_name: String,
    /// Answer text.
    pub answer: String,
    /// Submission time, when the API includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TableRow for WeeklyAnswer {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.question, query)
            || contains_ci(&self.user_name, query)
            || contains_ci(&self.answer, query)
    }
}

/// One submitted weekly rating (read-only apart from deletion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRating {
    /// Stable row identifier.
    pub id: i64,
    /// Display name of the rating user.
    pub user_name: String,
    /// Rating value on the app's scale.
    pub rating: u8,
    /// Submission time, when the API includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TableRow for WeeklyRating {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.user_name, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn question_rows_deserialize_from_the_api_shape() {
        let body = r#"{"id":3,"question":"What went well this week?","status":"active"}"#;
        let row: WeeklyQuestion = serde_json::from_str(body).expect("deserializes");
        assert_eq!(row.id, 3);
        assert_eq!(row.text, "What went well this week?");
        assert_eq!(row.status, QuestionStatus::Active);
        assert_eq!(row.status.to_string(), "Active");
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("What changed?", true)]
    fn question_draft_rejects_blank_text(#[case] text: &str, #[case] ok: bool) {
        let draft = WeeklyQuestionDraft {
            text: text.to_owned(),
            status: QuestionStatus::Active,
        };
        assert_eq!(draft.validate().is_ok(), ok);
    }

    #[rstest]
    fn question_draft_merges_trimmed_text() {
        let mut row = WeeklyQuestion {
            id: 1,
            text: "Old".to_owned(),
            status: QuestionStatus::Active,
        };
        let draft = WeeklyQuestionDraft {
            text: "  New question  ".to_owned(),
            status: QuestionStatus::Inactive,
        };
        draft.merge_into(&mut row);
        assert_eq!(row.text, "New question");
        assert_eq!(row.status, QuestionStatus::Inactive);
    }

    #[rstest]
    fn question_draft_serialises_wire_field_names() {
        let draft = WeeklyQuestionDraft {
            text: "How was date night?".to_owned(),
            status: QuestionStatus::Active,
        };
        assert_eq!(
            draft.form_fields(),
            vec![
                ("question".to_owned(), "How was date night?".to_owned()),
                ("status".to_owned(), "active".to_owned()),
            ]
        );
    }

    #[rstest]
    #[case("went well", true)]
    #[case("ADA", true)]
    #[case("we talked", true)]
    #[case("nothing here", false)]
    fn answers_search_question_user_and_text(#[case] query: &str, #[case] hit: bool) {
        let row = WeeklyAnswer {
            id: 1,
            question: "What went well this week?".to_owned(),
            user_name: "Ada".to_owned(),
            answer: "We talked more.".to_owned(),
            created_at: None,
        };
        assert_eq!(row.matches(query), hit);
    }

    #[rstest]
    fn ratings_search_by_user_name_only() {
        let row = WeeklyRating {
            id: 1,
            user_name: "Grace".to_owned(),
            rating: 4,
            created_at: None,
        };
        assert!(row.matches("grace"));
        assert!(!row.matches("4"));
    }
}
