//! Unified client error types.

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    /// A short human-readable message suitable for store `error` fields
    /// (and ultimately toasts). Server bodies are dropped here — the typed
    /// error keeps them for callers that want the detail.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(HttpError::Unauthorized) => "Not authenticated".to_string(),
            ClientError::Http(HttpError::NotFound(_)) => "Not found".to_string(),
            ClientError::Http(HttpError::BadRequest(_)) => "Request rejected".to_string(),
            ClientError::Http(HttpError::RateLimited { .. }) => {
                "Too many requests, try again shortly".to_string()
            }
            ClientError::Http(HttpError::ServerError { status, .. }) => {
                format!("Server error ({})", status)
            }
            ClientError::Http(HttpError::Timeout) => "Request timed out".to_string(),
            ClientError::Http(_) => "Network error".to_string(),
            ClientError::Storage(_) => "Storage unavailable".to_string(),
            ClientError::Serde(_) => "Unexpected server response".to_string(),
            ClientError::Other(msg) => msg.clone(),
        }
    }

    /// True when the failure is the backend saying "no session".
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Http(HttpError::Unauthorized))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Local persistence errors. Never surfaced to the UI — layout preference
/// loss is non-fatal, so these are logged and swallowed at the store layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored data corrupt: {0}")]
    Corrupt(String),
}
