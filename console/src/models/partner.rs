//! Partner profile resource (list and update only).

use serde::{Deserialize, Serialize};

use crate::domain::{contains_ci, ResourceError, RowDraft, TableRow};
use crate::outbound::rest::FormPayload;

/// One partner profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Stable row identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name, when the profile has one.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account email.
    pub email: String,
    /// Email of the linked partner, when one is linked.
    #[serde(default)]
    pub my_partner_email: Option<String>,
}

impl TableRow for Partner {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.first_name, query) || contains_ci(&self.email, query)
    }
}

/// Draft for editing a partner profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerDraft {
    /// Given name; must not be blank.
    pub first_name: String,
    /// Account email; must not be blank.
    pub email: String,
    /// Linked partner email; empty clears the link.
    pub my_partner_email: Option<String>,
}

impl RowDraft<Partner> for PartnerDraft {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.first_name.trim().is_empty() {
            return Err(ResourceError::validation("Name cannot be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(ResourceError::validation("Email cannot be empty"));
        }
        Ok(())
    }

    fn merge_into(&self, row: &mut Partner) {
        row.first_name = self.first_name.trim().to_owned();
        row.email = self.email.trim().to_owned();
        row.my_partner_email = self
            .my_partner_email
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
    }
}

impl FormPayload for PartnerDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("first_name".to_owned(), self.first_name.trim().to_owned()),
            ("email".to_owned(), self.email.trim().to_owned()),
        ];
        if let Some(partner_email) = self
            .my_partner_email
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            fields.push(("my_partner_email".to_owned(), partner_email.to_owned()));
        }
        fields
    }
}
