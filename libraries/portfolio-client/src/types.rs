//! Types for Portfolio API requests and responses.

use portfolio_core::UserSummary;
use serde::{Deserialize, Serialize};

/// Base URL of the hosted Portfolio API, including the `/api/v1` path.
pub const DEFAULT_API_BASE: &str = "https://portfolio-api-three-black.vercel.app/api/v1";

/// Configuration for connecting to a Portfolio API deployment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g. `https://portfolio.example.com/api/v1`)
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the register endpoint.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "itsonId")]
    pub itson_id: String,
    pub password: String,
}

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Raw auth token; sent back on every authenticated call
    pub token: String,
    /// The logged-in user, with the identifier already normalized
    pub user: UserSummary,
}

// =============================================================================
// Project Types
// =============================================================================

/// Confirmation payload returned by the delete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: Option<String>,
}
