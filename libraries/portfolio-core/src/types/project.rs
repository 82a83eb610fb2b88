/// Project domain type
use serde::{Deserialize, Serialize};

/// Portfolio project as returned by the API.
///
/// The project is owned entirely by the remote service; the client
/// holds no local cache and every read re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    #[serde(default)]
    pub id: String,

    /// Alternate identifier field some endpoints return instead of `id`
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,

    /// Project title
    pub title: String,

    /// Project description
    #[serde(default)]
    pub description: String,

    /// Technologies used, in display order
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Repository URL
    #[serde(default)]
    pub repository: Option<String>,

    /// Image URLs, in display order
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
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

/// Payload for creating a new project.
///
/// The backend resolves the owning user from the auth token, so no
/// user identifier travels in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project title (required by the API)
    pub title: String,

    /// Project description (required by the API)
    pub description: String,

    /// Technologies used
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateProject {
    /// Create a payload with the required fields only.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies: Vec::new(),
            repository: None,
            images: Vec::new(),
        }
    }
}

/// Partial update for an existing project.
///
/// Unset fields are omitted from the JSON body, so the server leaves
/// them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProject {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Replacement technology list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    /// New repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Replacement image list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}
