//! Portfolio Core
//!
//! Domain types shared by the Portfolio API client and its consumers.
//!
//! This crate defines:
//! - **Domain Types**: `Project`, `UserSummary`, and their write models
//! - **Identifiers**: the validated `ItsonId` public lookup key
//! - **Normalization**: the `_id` -> `id` identifier rule applied to
//!   everything the API returns
//!
//! # Example
//!
//! ```rust
//! use portfolio_core::{CreateProject, ItsonId};
//!
//! // Validate a public lookup key
//! let id: ItsonId = "123456".parse().expect("six digits");
//! assert_eq!(id.as_str(), "123456");
//!
//! // Build a project payload
//! let project = CreateProject::new("My Portfolio", "A personal site");
//! assert!(project.technologies.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{
    CreateProject, InvalidItsonId, ItsonId, Project, UpdateProject, UserSummary,
};
