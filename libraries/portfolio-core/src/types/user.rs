/// User domain type
use serde::{Deserialize, Serialize};

/// Summary of a registered user as returned by the API.
///
/// Some endpoints return the identifier as `_id` instead of `id`.
/// [`UserSummary::into_normalized`] copies it into `id` so downstream
/// consumers only ever read `id`; the client applies this before
/// persisting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique user identifier
    #[serde(default)]
    pub id: String,

    /// Alternate identifier field some endpoints return instead of `id`
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,

    /// Display name
    pub name: String,

    /// Account email
    pub email: String,
}

impl UserSummary {
    /// Copy `_id` into `id` when the server omitted `id`.
    pub fn into_normalized(mut self) -> Self {
        if self.id.is_empty() {
            if let Some(legacy) = self.legacy_id.take() {
                self.id = legacy;
            }
        }
        self
    }
}
