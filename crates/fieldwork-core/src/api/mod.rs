//! REST client for the field-survey backend.
//!
//! This module provides the HTTP plumbing shared by every resource: URL
//! composition against a single configured origin, bearer-token
//! injection, a fixed per-request timeout, and uniform decoding of
//! responses into typed models or [`ApiError`]s. The per-resource
//! endpoint methods live in sibling modules, one file per backend
//! resource.
//!
//! Error semantics follow the original front end: failures surface as-is
//! with no retry or partial-failure recovery, and a 401 discards the
//! stored session token before reporting [`ApiError::Unauthorized`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ApiError, Result};

pub mod assignments;
pub mod employees;
pub mod hr;
pub mod questionnaires;
pub mod session;
pub mod studies;

pub use session::Session;

/// Origin used when neither the builder nor the environment names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Per-request timeout, matching the original client configuration.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed client for the backend REST API.
///
/// Cheap to clone; all clones share the HTTP connection pool and the
/// session context.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// The session context this client authenticates with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configured backend origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Decode a response, funneling every non-success status through the
    /// shared error mapping. A 401 forces a logout before reporting.
    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.session.forget();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Like [`Self::decode`], for endpoints whose success body is empty.
    async fn decode_empty(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.session.forget();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {path}");
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST {path}");
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        self.decode(response).await
    }

    /// POST without a body, for the relationship endpoints.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("POST {path}");
        let response = self.authorize(self.http.post(self.url(path))).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!("PUT {path}");
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        self.decode(response).await
    }

    /// PUT without a body, for the status-transition endpoints.
    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("PUT {path}");
        let response = self.authorize(self.http.put(self.url(path))).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {path}");
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        self.decode_empty(response).await
    }

    /// DELETE that returns the updated resource, for the relationship
    /// endpoints.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("DELETE {path}");
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        self.decode(response).await
    }
}

/// Builder for creating and configuring [`ApiClient`] instances.
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    session_file: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend origin. Defaults to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supplies a bearer token directly, bypassing the session file.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets a custom session file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/fieldwork/session` or
    /// `~/.local/share/fieldwork/session`.
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Overrides the fixed per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the origin does not parse as
    /// a URL or the HTTP client cannot be constructed, and
    /// `ApiError::SessionStore` if an existing session file is
    /// unreadable.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| {
            ApiError::configuration(format!("Invalid API origin '{base_url}': {e}"))
        })?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let session = match self.token {
            Some(token) => Session::with_token(token),
            None => Session::load(self.session_file)?,
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .map_err(|e| ApiError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(ApiClient {
            http,
            base_url,
            session: Arc::new(session),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_invalid_origin() {
        let result = ApiClientBuilder::new()
            .with_base_url("not a url")
            .with_token("tok")
            .build();
        assert!(matches!(result, Err(ApiError::Configuration { .. })));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ApiClientBuilder::new()
            .with_base_url("http://backend.example:8081/")
            .with_token("tok")
            .build()
            .expect("valid configuration");
        assert_eq!(client.base_url(), "http://backend.example:8081");
        assert_eq!(
            client.url("/api/employees"),
            "http://backend.example:8081/api/employees"
        );
    }

    #[test]
    fn test_builder_defaults_to_local_origin() {
        let client = ApiClientBuilder::new()
            .with_token("tok")
            .build()
            .expect("valid configuration");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
