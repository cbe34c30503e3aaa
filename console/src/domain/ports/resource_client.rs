//! Port for the per-resource endpoint set.
//!
//! A [`ResourceClient`] binds one tabular resource to its REST operations.
//! Only `list` is mandatory; the mutation methods default to
//! [`ResourceError::Unsupported`] so read-only and delete-only screens
//! implement exactly the endpoints their resource exposes.

use async_trait::async_trait;

use crate::domain::row::{RowDraft, TableRow};
use crate::domain::ResourceError;

/// Identifier type of a client's row.
pub type RowId<C> = <<C as ResourceClient>::Row as TableRow>::Id;

/// Result of a successful create or update call.
///
/// The API is inconsistent about returning the affected entity: some
/// endpoints echo the stored row, others only acknowledge. Both shapes are
/// carried here so the controller can patch locally or fall back to merging
/// the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome<R> {
    /// The stored entity, when the endpoint returns one.
    pub row: Option<R>,
    /// Server-provided success message, when present.
    pub message: Option<String>,
}

impl<R> MutationOutcome<R> {
    /// Outcome carrying the stored entity.
    #[must_use]
    pub fn returned(row: R, message: Option<String>) -> Self {
        Self {
            row: Some(row),
            message,
        }
    }

    /// Outcome acknowledging success without an entity.
    #[must_use]
    pub fn acknowledged(message: Option<String>) -> Self {
        Self { row: None, message }
    }
}

/// Endpoint set for one tabular resource.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Row type this client fetches and mutates.
    type Row: TableRow + Clone + Send + Sync + 'static;
    /// Draft type submitted to create and update.
    type Draft: RowDraft<Self::Row> + 'static;

    /// Fetch the full list for this resource.
    async fn list(&self) -> Result<Vec<Self::Row>, ResourceError>;

    /// Create a new row from a draft.
    async fn create(
        &self,
        _draft: &Self::Draft,
    ) -> Result<MutationOutcome<Self::Row>, ResourceError> {
        Err(ResourceError::unsupported("create"))
    }

    /// Update the row with the given id from a draft.
    async fn update(
        &self,
        _id: <Self::Row as TableRow>::Id,
        _draft: &Self::Draft,
    ) -> Result<MutationOutcome<Self::Row>, ResourceError> {
        Err(ResourceError::unsupported("update"))
    }

    /// Delete the row with the given id, returning any server message.
    async fn delete(
        &self,
        _id: <Self::Row as TableRow>::Id,
    ) -> Result<Option<String>, ResourceError> {
        Err(ResourceError::unsupported("delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::NoDraft;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct StubRow {
        id: i64,
    }

    impl TableRow for StubRow {
        type Id = i64;

        fn id(&self) -> Self::Id {
            self.id
        }

        fn matches(&self, _query: &str) -> bool {
            true
        }
    }

    /// List-only client relying on every default mutation method.
    struct ListOnlyClient;

    #[async_trait]
    impl ResourceClient for ListOnlyClient {
        type Row = StubRow;
        type Draft = NoDraft;

        async fn list(&self) -> Result<Vec<Self::Row>, ResourceError> {
            Ok(vec![StubRow { id: 1 }])
        }
    }

    #[tokio::test]
    async fn default_mutations_report_unsupported() {
        let client = ListOnlyClient;

        let create = client.create(&NoDraft).await.expect_err("no create route");
        assert_eq!(create, ResourceError::unsupported("create"));

        let update = client
            .update(1, &NoDraft)
            .await
            .expect_err("no update route");
        assert_eq!(update, ResourceError::unsupported("update"));

        let delete = client.delete(1).await.expect_err("no delete route");
        assert_eq!(delete, ResourceError::unsupported("delete"));
    }

    #[tokio::test]
    async fn list_still_works_without_mutations() {
        let rows = client_list().await;
        assert_eq!(rows, vec![StubRow { id: 1 }]);
    }

    async fn client_list() -> Vec<StubRow> {
        ListOnlyClient.list().await.expect("list succeeds")
    }
}
