//! Portfolio API Client
//!
//! HTTP client library for the Portfolio REST API.
//!
//! # Features
//!
//! - **Authentication**: register, login, persisted session
//! - **Projects**: list, get, create, update, delete
//! - **Public lookup**: a user's public projects by 6-digit ItsonId
//!
//! Every operation shares one request/response discipline: bodies are
//! read as text and parsed leniently, non-success statuses surface the
//! server's `message` field (or the raw body, or a per-operation
//! fallback), and authenticated calls fail fast when no token is
//! persisted.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_client::{ClientConfig, FileSessionStore, PortfolioClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileSessionStore::open("session.json"));
//!     let client = PortfolioClient::new(ClientConfig::default(), store)?;
//!
//!     let login = client.login("ana@example.com", "secret").await?;
//!     println!("Welcome {}", login.user.name);
//!
//!     for project in client.get_projects().await? {
//!         println!("{}: {}", project.id, project.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod auth;
mod client;
mod error;
mod projects;
mod response;
mod session;
mod types;

// Re-export main types
pub use client::PortfolioClient;
pub use error::{ClientError, Result};
pub use session::{
    FileSessionStore, MemorySessionStore, SessionStore, AUTH_TOKEN_KEY, LEGACY_LOGGED_IN_KEY,
    USER_KEY,
};
pub use types::{
    ClientConfig, DeleteConfirmation, LoginRequest, LoginResponse, RegisterRequest,
    DEFAULT_API_BASE,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use projects::{ProjectsClient, AUTH_HEADER};
