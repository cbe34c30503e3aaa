//! Purchased subscription resource (read-only apart from deletion).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, TableRow};

/// Purchasing user, as embedded in a subscription row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// Given name.
    pub first_name: String,
    /// Family name, when the profile has one.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account email.
    pub email: String,
}

/// Purchased plan, as embedded in a subscription row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan name at purchase time.
    pub name: String,
    /// Price at purchase time, when the API includes it.
    #[serde(default)]
    pub price: Option<String>,
}

/// One purchase row from the admin subscription list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Stable row identifier.
    pub id: i64,
    /// Purchasing user.
    pub user: Subscriber,
    /// Purchased plan.
    pub plan: PlanSummary,
    /// Purchase time, when the API includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Expiry time, when the API includes it.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TableRow for Subscription {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.user.first_name, query)
            || contains_ci(&self.user.email, query)
            || contains_ci(&self.plan.name, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn subscription() -> Subscription {
        Subscription {
            id: 11,
            user: Subscriber {
                first_name: "Alice".to_owned(),
                last_name: Some("Smith".to_owned()),
                email: "alice@example.com".to_owned(),
            },
            plan: PlanSummary {
                name: "Annual Premium".to_owned(),
                price: Some("79.00".to_owned()),
            },
            created_at: None,
            expires_at: None,
        }
    }

    #[rstest]
    #[case("alice", true)]
    #[case("ALICE@EXAMPLE.COM", true)]
    #[case("premium", true)]
    #[case("smith", false)]
    fn search_covers_user_name_email_and_plan(#[case] query: &str, #[case] hit: bool) {
        assert_eq!(subscription().matches(query), hit);
    }

    #[rstest]
    fn rows_deserialize_with_nested_entities() {
        let body = r#"{
            "id": 11,
            "user": {"first_name": "Alice", "email": "alice@example.com"},
            "plan": {"name": "Annual Premium"}
        }"#;
        let row: Subscription = serde_json::from_str(body).expect("deserializes");
        assert_eq!(row.id, 11);
        assert_eq!(row.user.first_name, "Alice");
        assert!(row.user.last_name.is_none());
        assert_eq!(row.plan.name, "Annual Premium");
    }
}
