//! REST client for the CMS HTTP API.
//!
//! Reads collections (`GET /api/{collection}`) and globals
//! (`GET /api/globals/{slug}`) using [`reqwest`]. Every request asks for a
//! fresh response so recently published content is never served stale.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;

use folio_core::query::{CollectionQuery, DocumentList, GlobalSlug};
use folio_core::types::Document;

use crate::error::GatewayError;

/// HTTP client for a single CMS deployment.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RestClient {
    /// Create a client whose requests are bounded by `timeout`.
    ///
    /// * `base_url`  - CMS origin, e.g. `https://cms.example.com`.
    /// * `api_token` - sent as `Authorization: Bearer <token>` when set.
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url, api_token))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a list query.
    ///
    /// Sends `GET /api/{collection}?where[f][equals]=v&sort=f&limit=N`.
    pub async fn find(&self, query: &CollectionQuery) -> Result<DocumentList, GatewayError> {
        let url = format!("{}/api/{}", self.base_url, query.collection);
        let response = self
            .request(&url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a global document.
    ///
    /// Sends `GET /api/globals/{slug}`. A 404 means the global has never
    /// been saved and yields `None`.
    pub async fn find_global(&self, slug: GlobalSlug) -> Result<Option<Document>, GatewayError> {
        let url = format!("{}/api/globals/{}", self.base_url, slug);
        let response = self.request(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let doc: Document = Self::parse_response(response).await?;
        Ok((!doc.is_null()).then_some(doc))
    }

    // ---- private helpers ----

    /// A GET request with no-cache headers and the bearer token, if any.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache");
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GatewayError::Rejected`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
