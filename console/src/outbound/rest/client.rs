//! Generic resource client binding one resource to its route table.
//!
//! Each screen differs only in its paths, its id field name, and how its
//! draft serialises to form fields; everything else about talking to the API
//! is identical. [`RestResourceClient`] captures the identical part once and
//! is parameterised by a [`Routes`] table per resource.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::envelope::{decode_ack, decode_mutation, decode_rows};
use super::transport::RestTransport;
use crate::domain::ports::{MutationOutcome, ResourceClient};
use crate::domain::row::{RowDraft, TableRow};
use crate::domain::ResourceError;

/// How a resource's list endpoint is called.
///
/// The API is not uniform: some lists are plain GETs, some are POSTs with a
/// form body, some are POSTs with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMethod {
    /// GET with the session user id as a query parameter.
    Get,
    /// POST with url-encoded fields.
    PostForm,
    /// POST with a JSON body.
    PostJson,
}

/// Route table for one resource.
///
/// Mutations left unset make the matching operation report
/// [`ResourceError::Unsupported`] before any request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    list: String,
    list_method: ListMethod,
    create: Option<String>,
    update: Option<String>,
    delete: Option<String>,
    id_field: String,
}

impl Routes {
    /// Table with only a list endpoint.
    pub fn list(path: impl Into<String>, method: ListMethod) -> Self {
        Self {
            list: path.into(),
            list_method: method,
            create: None,
            update: None,
            delete: None,
            id_field: "id".to_owned(),
        }
    }

    /// Add a create endpoint.
    #[must_use]
    pub fn with_create(mut self, path: impl Into<String>) -> Self {
        self.create = Some(path.into());
        self
    }

    /// Add an update endpoint.
    #[must_use]
    pub fn with_update(mut self, path: impl Into<String>) -> Self {
        self.update = Some(path.into());
        self
    }

    /// Add a delete endpoint.
    #[must_use]
    pub fn with_delete(mut self, path: impl Into<String>) -> Self {
        self.delete = Some(path.into());
        self
    }

    /// Override the form field carrying the row id (default `id`).
    ///
    /// The plans endpoints, for one, expect `plan_id`.
    #[must_use]
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }
}

/// Serialisation of a draft into url-encoded form fields.
pub trait FormPayload {
    /// Field name/value pairs submitted to create and update endpoints.
    fn form_fields(&self) -> Vec<(String, String)>;
}

impl FormPayload for crate::domain::NoDraft {
    fn form_fields(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// REST adapter implementing [`ResourceClient`] for one route table.
pub struct RestResourceClient<R, D> {
    transport: Arc<RestTransport>,
    routes: Routes,
    _marker: PhantomData<fn() -> (R, D)>,
}

impl<R, D> RestResourceClient<R, D> {
    /// Bind a route table to a shared transport.
    #[must_use]
    pub fn new(transport: Arc<RestTransport>, routes: Routes) -> Self {
        Self {
            transport,
            routes,
            _marker: PhantomData,
        }
    }

    fn session_fields(&self) -> Vec<(String, String)> {
        self.transport
            .session()
            .current_user_id()
            .map(|id| vec![("user_id".to_owned(), id.to_string())])
            .unwrap_or_default()
    }

    fn session_body(&self) -> serde_json::Value {
        match self.transport.session().current_user_id() {
            Some(id) => json!({ "user_id": id.as_str() }),
            None => json!({}),
        }
    }
}

#[async_trait]
impl<R, D> ResourceClient for RestResourceClient<R, D>
where
    R: TableRow + Clone + DeserializeOwned + Send + Sync + 'static,
    D: RowDraft<R> + FormPayload + 'static,
{
    type Row = R;
    type Draft = D;

    async fn list(&self) -> Result<Vec<R>, ResourceError> {
        let body = match self.routes.list_method {
            ListMethod::Get => {
                self.transport
                    .get(&self.routes.list, &self.session_fields())
                    .await?
            }
            ListMethod::PostForm => {
                self.transport
                    .post_form(&self.routes.list, &self.session_fields())
                    .await?
            }
            ListMethod::PostJson => {
                self.transport
                    .post_json(&self.routes.list, &self.session_body())
                    .await?
            }
        };
        decode_rows(&body)
    }

    async fn create(&self, draft: &D) -> Result<MutationOutcome<R>, ResourceError> {
        let Some(path) = self.routes.create.as_deref() else {
            return Err(ResourceError::unsupported("create"));
        };
        let mut fields = draft.form_fields();
        fields.extend(self.session_fields());
        let body = self.transport.post_form(path, &fields).await?;
        decode_mutation(&body)
    }

    async fn update(&self, id: R::Id, draft: &D) -> Result<MutationOutcome<R>, ResourceError> {
        let Some(path) = self.routes.update.as_deref() else {
            return Err(ResourceError::unsupported("update"));
        };
        let mut fields = draft.form_fields();
        fields.push((self.routes.id_field.clone(), id.to_string()));
        fields.extend(self.session_fields());
        let body = self.transport.post_form(path, &fields).await?;
        decode_mutation(&body)
    }

    async fn delete(&self, id: R::Id) -> Result<Option<String>, ResourceError> {
        let Some(path) = self.routes.delete.as_deref() else {
            return Err(ResourceError::unsupported("delete"));
        };
        let mut fields = vec![(self.routes.id_field.clone(), id.to_string())];
        fields.extend(self.session_fields());
        let body = self.transport.post_form(path, &fields).await?;
        decode_ack(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoDraft, SessionContext};
    use serde::Deserialize;
    use std::time::Duration;
    use url::Url;

    #[derive(Debug, Clone, Deserialize)]
    struct Row {
        id: i64,
    }

    impl TableRow for Row {
        type Id = i64;

        fn id(&self) -> Self::Id {
            self.id
        }

        fn matches(&self, _query: &str) -> bool {
            true
        }
    }

    fn client(routes: Routes) -> RestResourceClient<Row, NoDraft> {
        let base = Url::parse("https://api.invalid/console/api/").expect("valid base");
        let transport =
            RestTransport::new(base, Duration::from_secs(5), SessionContext::anonymous())
                .expect("client builds");
        RestResourceClient::new(Arc::new(transport), routes)
    }

    #[tokio::test]
    async fn missing_routes_report_unsupported_before_any_request() {
        let client = client(Routes::list("rows-list", ListMethod::Get));

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

    #[test]
    fn routes_default_to_the_plain_id_field() {
        let routes = Routes::list("rows-list", ListMethod::PostForm)
            .with_delete("rows-delete")
            .with_id_field("row_id");
        assert_eq!(
            routes,
            Routes {
                list: "rows-list".to_owned(),
                list_method: ListMethod::PostForm,
                create: None,
                update: None,
                delete: Some("rows-delete".to_owned()),
                id_field: "row_id".to_owned(),
            }
        );
    }
}
