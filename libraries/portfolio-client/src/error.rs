//! Error types for the Portfolio API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Portfolio API.
///
/// Every variant carries a human-readable message; the `Display`
/// output of [`ClientError::Api`] is exactly the message extracted
/// from the server response, so callers can surface it verbatim.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the request (non-success HTTP status)
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Authenticated operation attempted without a persisted token
    #[error("No autenticado")]
    AuthRequired,

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Success response body did not decode into the expected type
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Persisted session record could not be read back
    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Result type for Portfolio client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
