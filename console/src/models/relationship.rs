//! Relationship progress resource (fully read-only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, TableRow};

/// One couple's streak and tier standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipProgress {
    /// Stable row identifier.
    pub id: i64,
    /// Display name of the tracked user.
    pub user_name: String,
    /// Account email of the tracked user.
    pub user_email: String,
    /// Consecutive check-in days.
    pub streak_days: u32,
    /// Accumulated points.
    pub points: u32,
    /// Tier name derived from points.
    pub tier: String,
    /// Progress towards the next tier, 0 to 100.
    pub progress_percent: u8,
    /// Tier description shown alongside the progress bar.
    #[serde(default)]
    pub description: Option<String>,
    /// Last update time, when the API includes it.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TableRow for RelationshipProgress {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.user_name, query) || contains_ci(&self.user_email, query)
    }
}
