//! Taiga API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::{Result, TaigaError};

const DEFAULT_API_URL: &str = "https://api.taiga.io/api/v1";
const USER_AGENT: &str = concat!("taigapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Taiga API client.
///
/// Handles authentication and HTTP requests. Entity-specific operations
/// are implemented via the `Get`, `List`, `Create`, `Update` and `Delete`
/// traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. It holds no per-entity state, so independent calls may
/// be issued from any number of clones concurrently.
///
/// # Example
///
/// ```no_run
/// use taigapi::TaigaClient;
///
/// # fn example() -> taigapi::Result<()> {
/// // Create from environment variables
/// let client = TaigaClient::from_env()?;
///
/// // Or configure manually
/// let client = TaigaClient::new("your-auth-token", "https://api.taiga.io/api/v1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TaigaClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for TaigaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaigaClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TaigaClient {
    /// Create a client from environment variables.
    ///
    /// Uses `TAIGA_TOKEN` for authentication and optionally `TAIGA_URL`
    /// for the base URL (defaults to `https://api.taiga.io/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if `TAIGA_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TAIGA_TOKEN").map_err(|_| {
            TaigaError::ConfigMissing("TAIGA_TOKEN environment variable not set".to_string())
        })?;

        let base_url = env::var("TAIGA_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - Taiga auth token
    /// * `base_url` - Base URL for the Taiga API (e.g., `https://api.taiga.io/api/v1`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so Url::join keeps the last segment
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(TaigaError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a GET request with query parameters.
    ///
    /// Collection reads go through here; Taiga honours the
    /// `x-disable-pagination` header so list responses come back as one
    /// flat array in service order.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("x-disable-pagination", "True")
            .query(query)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a POST request with no body.
    ///
    /// Used by action endpoints such as `like`, `star`, `upvote` and the
    /// history comment-moderation toggles.
    #[tracing::instrument(skip(self))]
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a multipart POST request (attachment uploads).
    #[tracing::instrument(skip(self, form))]
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Make a DELETE request (no body).
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(TaigaError::Http)?;

        Self::check_response(path, response).await
    }

    /// Check response status and convert failures to the error taxonomy.
    async fn check_response(path: &str, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 404 {
            return Err(TaigaError::NotFound {
                resource: path.to_string(),
            });
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(TaigaError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;

        match status.as_u16() {
            400 => Err(TaigaError::Validation { message }),
            401 | 403 => Err(TaigaError::PermissionDenied {
                message,
                status_code: status.as_u16(),
            }),
            _ => Err(TaigaError::Api {
                message,
                status_code: Some(status.as_u16()),
            }),
        }
    }

    /// Extract error message from a failed response.
    ///
    /// Taiga reports errors under `_error_message`; DRF-style responses
    /// use `detail`.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("_error_message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(msg) = json.get("detail").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        body
    }
}
