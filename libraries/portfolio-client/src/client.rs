//! Main Portfolio API client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::projects::ProjectsClient;
use crate::response::{decode, map_send_error};
use crate::session::{
    MemorySessionStore, SessionStore, AUTH_TOKEN_KEY, LEGACY_LOGGED_IN_KEY, USER_KEY,
};
use crate::types::{ClientConfig, DeleteConfirmation, LoginResponse};
use portfolio_core::{CreateProject, Project, UpdateProject, UserSummary};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Main client for interacting with the Portfolio API.
///
/// The client is the single point of contact with the remote service.
/// It owns the HTTP client, the base URL, and the injected session
/// store; the token is re-read from the store on every authenticated
/// call, and missing tokens fail before any request is issued.
///
/// # Example
///
/// ```ignore
/// use portfolio_client::{ClientConfig, PortfolioClient};
///
/// // Create client against the hosted API with an in-memory session
/// let client = PortfolioClient::with_memory_store(ClientConfig::default())?;
///
/// // Login
/// let login = client.login("ana@example.com", "secret").await?;
/// println!("Welcome {}", login.user.name);
///
/// // Get projects
/// let projects = client.get_projects().await?;
/// println!("Found {} projects", projects.len());
/// ```
pub struct PortfolioClient {
    http: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl PortfolioClient {
    /// Create a new client with the given configuration and session store.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("PortfolioClient/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    /// Create a client with an ephemeral in-memory session store.
    pub fn with_memory_store(config: ClientConfig) -> Result<Self> {
        Self::new(config, Arc::new(MemorySessionStore::new()))
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Get the persisted auth token, if any.
    pub fn get_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    /// Check whether a token is persisted.
    ///
    /// Token presence is the sole authentication signal; no expiry is
    /// tracked client-side.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Get the persisted user record, if any.
    pub fn get_user(&self) -> Result<Option<UserSummary>> {
        match self.store.get(USER_KEY) {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                ClientError::Storage(format!("stored user record is not valid JSON: {e}"))
            }),
            None => Ok(None),
        }
    }

    /// Clear the persisted session.
    ///
    /// Removes the token, the user record, and the legacy `loggedIn`
    /// marker.
    pub fn logout(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.store.remove(LEGACY_LOGGED_IN_KEY);
        info!("Logged out");
    }

    fn require_token(&self) -> Result<String> {
        self.get_token().ok_or(ClientError::AuthRequired)
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Register a new user. Does not log in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        itson_id: &str,
        password: &str,
    ) -> Result<UserSummary> {
        AuthClient::new(&self.http, &self.base_url)
            .register(name, email, itson_id, password)
            .await
    }

    /// Login with email and password.
    ///
    /// On success the token and the normalized user record are
    /// persisted to the session store. A failed login leaves the
    /// store untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let login = AuthClient::new(&self.http, &self.base_url)
            .login(email, password)
            .await?;

        self.store.set(AUTH_TOKEN_KEY, &login.token);
        let raw = serde_json::to_string(&login.user)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        self.store.set(USER_KEY, &raw);

        Ok(login)
    }

    // =========================================================================
    // Projects (authenticated)
    // =========================================================================

    /// Get the authenticated user's projects.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let token = self.require_token()?;
        ProjectsClient::new(&self.http, &self.base_url, &token)
            .list()
            .await
    }

    /// Get a project by ID.
    pub async fn get_project_by_id(&self, project_id: &str) -> Result<Project> {
        let token = self.require_token()?;
        ProjectsClient::new(&self.http, &self.base_url, &token)
            .get(project_id)
            .await
    }

    /// Create a new project.
    pub async fn create_project(&self, project: &CreateProject) -> Result<Project> {
        let token = self.require_token()?;
        ProjectsClient::new(&self.http, &self.base_url, &token)
            .create(project)
            .await
    }

    /// Update a project with a partial payload.
    pub async fn update_project(
        &self,
        project_id: &str,
        updates: &UpdateProject,
    ) -> Result<Project> {
        let token = self.require_token()?;
        ProjectsClient::new(&self.http, &self.base_url, &token)
            .update(project_id, updates)
            .await
    }

    /// Delete a project.
    pub async fn delete_project(&self, project_id: &str) -> Result<Option<DeleteConfirmation>> {
        let token = self.require_token()?;
        ProjectsClient::new(&self.http, &self.base_url, &token)
            .delete(project_id)
            .await
    }

    // =========================================================================
    // Public lookup (no auth)
    // =========================================================================

    /// Get the public projects of the user behind `itson_id`.
    ///
    /// The 6-digit format is a caller-side validation (see
    /// `portfolio_core::ItsonId`); the value is forwarded as-is. An
    /// empty result is `Ok` with an empty list, not an error.
    pub async fn get_public_projects(&self, itson_id: &str) -> Result<Vec<Project>> {
        let url = format!("{}/publicProjects/{}", self.base_url, itson_id);
        debug!(url = %url, "Fetching public projects");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        let projects: Option<Vec<Project>> =
            decode(response, "Error al obtener proyectos públicos").await?;

        Ok(projects
            .unwrap_or_default()
            .into_iter()
            .map(Project::into_normalized)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(PortfolioClient::with_memory_store(ClientConfig::new("https://example.com")).is_ok());
        assert!(
            PortfolioClient::with_memory_store(ClientConfig::new("http://localhost:3000")).is_ok()
        );

        // Invalid URLs
        assert!(PortfolioClient::with_memory_store(ClientConfig::new("")).is_err());
        assert!(PortfolioClient::with_memory_store(ClientConfig::new("not-a-url")).is_err());
        assert!(PortfolioClient::with_memory_store(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = PortfolioClient::with_memory_store(ClientConfig::new(
            "https://example.com/api/v1/",
        ))
        .expect("valid url");

        assert_eq!(client.base_url(), "https://example.com/api/v1");
    }

    #[test]
    fn test_default_config_points_at_hosted_api() {
        let client =
            PortfolioClient::with_memory_store(ClientConfig::default()).expect("valid url");
        assert_eq!(client.base_url(), crate::types::DEFAULT_API_BASE);
    }
}
