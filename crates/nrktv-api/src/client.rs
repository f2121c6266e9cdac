//! `NrkClient` - request executor for the NRK content-catalog API.

use anyhow::Context;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::{DEFAULT_NOT_FOUND_MESSAGE, NrkError, Result};
use crate::query::{QueryOptions, serialize_query};

/// Default base URL of the NRK content-catalog API.
pub const DEFAULT_BASE_URL: &str = "https://psapi.nrk.no";

/// Builds the full request URL: `url?query`.
///
/// The `?` is always appended, even when the query is empty.
#[must_use]
pub fn build_request_url(url: &str, options: Option<&QueryOptions>) -> String {
    format!("{url}?{}", serialize_query(options))
}

/// NRK content-catalog API client.
///
/// Holds no per-request state; concurrent calls share only the underlying
/// connection pool.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct NrkClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL that endpoint paths are appended to.
    base_url: Url,
}

/// Builder for `NrkClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct NrkClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl NrkClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> anyhow::Result<NrkClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).context("invalid default base URL")?,
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(NrkClient {
            http_client,
            base_url,
        })
    }
}

impl NrkClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> NrkClientBuilder {
        NrkClientBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins an endpoint path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Sends a GET to `url?query` and returns the body as an opaque value.
    ///
    /// A JSON body is returned parsed. An empty body yields `Value::Null` and
    /// any other body is returned as `Value::String`. A 404 carries the
    /// default message, `"Tv Page doesn't exist"`.
    ///
    /// # Errors
    ///
    /// - [`NrkError::NotFound`], [`NrkError::RateLimited`],
    ///   [`NrkError::AgeRestricted`] for 404, 429 and 403.
    /// - [`NrkError::Transport`] for any other error status or network failure.
    /// - [`NrkError::InvalidUrl`] if `url` does not parse.
    pub async fn request(&self, url: &str, options: Option<&QueryOptions>) -> Result<Value> {
        self.request_with_not_found(url, options, DEFAULT_NOT_FOUND_MESSAGE)
            .await
    }

    /// Like [`NrkClient::request`], with a call-site specific 404 message.
    ///
    /// # Errors
    ///
    /// Same as [`NrkClient::request`].
    pub async fn request_with_not_found(
        &self,
        url: &str,
        options: Option<&QueryOptions>,
        not_found_message: &str,
    ) -> Result<Value> {
        let body = self.fetch_body(url, options, not_found_message).await?;
        Ok(body_to_value(body))
    }

    /// Sends a GET to `url?query` and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`NrkClient::request`], plus [`NrkError::Decode`] if the body
    /// does not deserialize into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: Option<&QueryOptions>,
        not_found_message: &str,
    ) -> Result<T> {
        let body = self.fetch_body(url, options, not_found_message).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends the GET, maps error statuses and returns the raw 2xx body.
    #[instrument(skip_all)]
    async fn fetch_body(
        &self,
        url: &str,
        options: Option<&QueryOptions>,
        not_found_message: &str,
    ) -> Result<String> {
        let request_url = Url::parse(&build_request_url(url, options))?;

        tracing::debug!(url = %request_url, "NRK API request");

        let response = self.http_client.get(request_url).send().await?;
        let status = response.status();

        tracing::debug!(%status, "NRK API response");

        if let Some(err) = NrkError::from_status(status, not_found_message) {
            return Err(err);
        }
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Parses a body as JSON, falling back to `Null` (empty) or a plain string.
fn body_to_value(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
