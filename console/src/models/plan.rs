//! Subscription plan resource.

use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, ResourceError, RowDraft, TableRow};
use crate::outbound::rest::FormPayload;

/// One purchasable plan.
///
/// `price` stays a string: the API serialises decimals as strings and the
/// console never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Stable row identifier.
    pub id: i64,
    /// Plan name shown on the paywall.
    pub name: String,
    /// Length of the plan in days.
    pub duration_days: u32,
    /// Price as the API serialises it.
    pub price: String,
}

impl TableRow for Plan {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
    }
}

/// Draft for creating or editing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDraft {
    /// Plan name; must not be blank.
    pub name: String,
    /// Length in days; must be at least one.
    pub duration_days: u32,
    /// Price as entered.
    pub price: String,
}

impl RowDraft<Plan> for PlanDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.name.trim().is_empty() {
            return Err(ResourceError::validation("Plan name cannot be empty"));
        }
        if self.duration_days == 0 {
            return Err(ResourceError::validation(
                "Plan duration must be at least one day",
            ));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut Plan) {
        row.name = self.name.trim().to_owned();
        row.duration_days = self.duration_days;
        row.price = self.price.trim().to_owned();
    }
}

impl FormPayload for PlanDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_owned(), self.name.trim().to_owned()),
            ("duration_days".to_owned(), self.duration_days.to_string()),
            ("price".to_owned(), self.price.trim().to_owned()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(name: &str, duration_days: u32) -> PlanDraft {
        PlanDraft {
            name: name.to_owned(),
            duration_days,
            price: "9.99".to_owned(),
        }
    }

    #[rstest]
    fn valid_draft_passes() {
        assert!(draft("Monthly", 30).validate().is_ok());
    }

    #[rstest]
    fn blank_name_is_rejected() {
        let error = draft("  ", 30).validate().expect_err("blank name");
        assert_eq!(error, ResourceError::validation("Plan name cannot be empty"));
    }

    #[rstest]
    fn zero_duration_is_rejected() {
        let error = draft("Monthly", 0).validate().expect_err("zero duration");
        assert!(matches!(error, ResourceError::Validation { .. }));
    }

    #[rstest]
    fn search_matches_the_name_case_insensitively() {
        let plan = Plan {
            id: 2,
            name: "Annual Premium".to_owned(),
            duration_days: 365,
            price: "79.00".to_owned(),
        };
        assert!(plan.matches("premium"));
        assert!(!plan.matches("365"));
    }
}
