//! HTTP client for the chatline REST API.
//!
//! All requests go through `get`/`post` here so the base URL, JSON
//! content type, bearer header, and timeout are handled in one place.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::ApiError;

/// HTTP request timeout in seconds.
/// The original client left requests unbounded; 30s fails fast enough for
/// an interactive front end while tolerating a slow server.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the chatline backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a fixed base endpoint.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource. The bearer token is attached only when present;
    /// a missing token is the server's problem to reject, not ours.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        debug!(path, authenticated = token.is_some(), "GET");
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::read_json(request.send().await?).await
    }

    /// POST a JSON body and parse a JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        debug!(path, authenticated = token.is_some(), "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::read_json(request.send().await?).await
    }

    /// POST a JSON body where the caller does not care about the response
    /// body, only whether the server accepted the request.
    pub async fn post_discard<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        debug!(path, authenticated = token.is_some(), "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Self::check_response(request.send().await?).await?;
        Ok(())
    }

    /// Check if a response is successful, returning an error with the body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_response(response).await?;
        response.json().await.map_err(|e| {
            if e.is_decode() {
                ApiError::InvalidResponse(e.to_string())
            } else {
                ApiError::Network(e)
            }
        })
    }
}
