//! HTTP transport owning request plumbing only.
//!
//! This adapter owns transport details: URL joining, timeouts, auth headers,
//! and error mapping into [`ResourceError::Network`]. It deliberately does
//! not inspect HTTP status codes: success and failure live in the response
//! body envelope, which the caller decodes.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::{ResourceError, SessionContext};

/// Shared transport for one API base URL.
///
/// Cheap to clone behind an [`std::sync::Arc`]; every screen of a console
/// instance shares one transport.
#[derive(Debug)]
pub struct RestTransport {
    client: Client,
    base_url: Url,
    session: SessionContext,
}

impl RestTransport {
    /// Build a transport with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        timeout: Duration,
        session: SessionContext,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// The session identity this transport attaches to requests.
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// GET a path relative to the base URL, with optional query pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Network`] when the URL is invalid or the
    /// request fails before a body is read.
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<u8>, ResourceError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!(%url, "GET");
        let request = self.authorised(self.client.get(url));
        let response = request.send().await.map_err(map_transport_error)?;
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(body.to_vec())
    }

    /// POST url-encoded form fields to a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Network`] when the URL is invalid or the
    /// request fails before a body is read.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>, ResourceError> {
        let url = self.endpoint(path)?;
        debug!(%url, fields = fields.len(), "POST form");
        let request = self.authorised(self.client.post(url)).form(fields);
        let response = request.send().await.map_err(map_transport_error)?;
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(body.to_vec())
    }

    /// POST a JSON body to a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Network`] when the URL is invalid or the
    /// request fails before a body is read.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Vec<u8>, ResourceError> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST json");
        let request = self.authorised(self.client.post(url)).json(body);
        let response = request.send().await.map_err(map_transport_error)?;
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ResourceError> {
        self.base_url
            .join(path)
            .map_err(|error| ResourceError::network(format!("invalid endpoint {path}: {error}")))
    }

    fn authorised(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> ResourceError {
    ResourceError::network(error.to_string())
}
