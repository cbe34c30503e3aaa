//! Recommendation card resource for the in-app engine.

use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, ResourceError, RowDraft, TableRow};
use crate::outbound::rest::FormPayload;

/// One recommendation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Stable row identifier.
    pub id: i64,
    /// Card headline.
    pub title: String,
    /// Secondary line under the headline.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Body copy.
    #[serde(default)]
    pub description: Option<String>,
    /// Call-to-action label.
    #[serde(default)]
    pub button_label: Option<String>,
    /// Uploaded card image URL, when one is set.
    #[serde(default)]
    pub image: Option<String>,
}

impl TableRow for Recommendation {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.title, query)
            || self
                .subtitle
                .as_deref()
                .is_some_and(|subtitle| contains_ci(subtitle, query))
    }
}

/// Draft for creating or editing a recommendation card.
///
/// Image upload is handled by the hosting form, not this draft; the API
/// keeps an existing image when the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationDraft {
    /// Card headline; must not be blank.
    pub title: String,
    /// Secondary line.
    pub subtitle: Option<String>,
    /// Body copy.
    pub description: Option<String>,
    /// Call-to-action label.
    pub button_label: Option<String>,
}

impl RowDraft<Recommendation> for RecommendationDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.title.trim().is_empty() {
            return Err(ResourceError::validation("Title cannot be empty"));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut Recommendation) {
        row.title = self.title.trim().to_owned();
        row.subtitle = normalised(self.subtitle.as_deref());
        row.description = normalised(self.description.as_deref());
        row.button_label = normalised(self.button_label.as_deref());
    }
}

impl FormPayload for RecommendationDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("title".to_owned(), self.title.trim().to_owned())];
        for (name, value) in [
            ("subtitle", self.subtitle.as_deref()),
            ("description", self.description.as_deref()),
            ("button_label", self.button_label.as_deref()),
        ] {
            if let Some(value) = normalised(value) {
                fields.push((name.to_owned(), value));
            }
        }
        fields
    }
}

fn normalised(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn blank_title_is_rejected() {
        let draft = RecommendationDraft {
            title: "  ".to_owned(),
            ..RecommendationDraft::default()
        };
        let error = draft.validate().expect_err("blank title");
        assert_eq!(error, ResourceError::validation("Title cannot be empty"));
    }

    #[rstest]
    fn only_populated_fields_reach_the_form() {
        let draft = RecommendationDraft {
            title: "Date night".to_owned(),
            subtitle: Some("This weekend".to_owned()),
            description: Some("  ".to_owned()),
            button_label: None,
        };
        assert_eq!(
            draft.form_fields(),
            vec![
                ("title".to_owned(), "Date night".to_owned()),
                ("subtitle".to_owned(), "This weekend".to_owned()),
            ]
        );
    }

    #[rstest]
    fn search_covers_title_and_subtitle() {
        let row = Recommendation {
            id: 1,
            title: "Date night".to_owned(),
            subtitle: Some("Try a new restaurant".to_owned()),
            description: Some("Once a week".to_owned()),
            button_label: None,
            image: None,
        };
        assert!(row.matches("NIGHT"));
        assert!(row.matches("restaurant"));
        assert!(!row.matches("week"));
    }

    #[rstest]
    fn merge_normalises_optional_copy() {
        let mut row = Recommendation {
            id: 1,
            title: "Old".to_owned(),
            subtitle: Some("Old subtitle".to_owned()),
            description: None,
            button_label: Some("Go".to_owned()),
            image: Some("cards/1.png".to_owned()),
        };
        let draft = RecommendationDraft {
            title: " New ".to_owned(),
            subtitle: None,
            description: Some("Body".to_owned()),
            button_label: Some("  ".to_owned()),
        };
        draft.merge_into(&mut row);
        assert_eq!(row.title, "New");
        assert!(row.subtitle.is_none());
        assert_eq!(row.description.as_deref(), Some("Body"));
        assert!(row.button_label.is_none());
        // The image survives an edit without a new upload.
        assert_eq!(row.image.as_deref(), Some("cards/1.png"));
    }
}
