//! Error types for Taiga API operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during Taiga API operations.
///
/// Remote failures are surfaced unchanged; this layer performs no retry or
/// local recovery.
#[derive(Debug, Error)]
pub enum TaigaError {
    /// Configuration is missing or incomplete.
    #[error("Taiga configuration required: {0}")]
    ConfigMissing(String),

    /// Resource not found (id, slug, or ref lookup failure).
    #[error("'{resource}' not found")]
    NotFound { resource: String },

    /// Payload rejected by the service (bad field value, missing required
    /// field, stale optimistic-concurrency version).
    #[error("Taiga rejected the request: {message}")]
    Validation { message: String },

    /// Caller lacks rights for the operation.
    #[error("permission denied: {message}")]
    PermissionDenied { message: String, status_code: u16 },

    /// Request throttled by the service.
    #[error("rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-success response.
    #[error("Taiga API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error (network, timeout, unreachable service).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A local file for an attachment upload could not be read. Raised
    /// before any network call is made.
    #[error("cannot read attachment file '{}': {source}", path.display())]
    AttachmentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Taiga operations.
pub type Result<T> = core::result::Result<T, TaigaError>;
