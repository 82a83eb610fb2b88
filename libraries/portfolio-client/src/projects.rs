//! Project CRUD endpoints of the Portfolio API.

use crate::error::Result;
use crate::response::{decode, map_send_error};
use crate::types::DeleteConfirmation;
use portfolio_core::{CreateProject, Project, UpdateProject};
use reqwest::Client;
use tracing::debug;

/// Header carrying the auth token on authenticated calls.
///
/// The API uses a custom header, not a bearer scheme.
pub const AUTH_HEADER: &str = "auth-token";

/// Project client for the Portfolio API.
///
/// All operations here require authentication; the token is checked
/// by [`PortfolioClient`](crate::PortfolioClient) before this client
/// is constructed.
pub struct ProjectsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> ProjectsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Get the authenticated user's projects.
    ///
    /// An empty response body counts as an empty list.
    pub async fn list(&self) -> Result<Vec<Project>> {
        let url = format!("{}/projects", self.base_url);
        debug!(url = %url, "Fetching projects");

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, self.token)
            .send()
            .await
            .map_err(map_send_error)?;

        let projects: Option<Vec<Project>> =
            decode(response, "Error al obtener proyectos").await?;

        Ok(projects
            .unwrap_or_default()
            .into_iter()
            .map(Project::into_normalized)
            .collect())
    }

    /// Get a single project by ID.
    pub async fn get(&self, project_id: &str) -> Result<Project> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!(url = %url, project_id = %project_id, "Fetching project");

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, self.token)
            .send()
            .await
            .map_err(map_send_error)?;

        let project: Project = decode(response, "Proyecto no encontrado").await?;
        Ok(project.into_normalized())
    }

    /// Create a new project owned by the authenticated user.
    pub async fn create(&self, project: &CreateProject) -> Result<Project> {
        let url = format!("{}/projects", self.base_url);
        debug!(url = %url, title = %project.title, "Creating project");

        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, self.token)
            .json(project)
            .send()
            .await
            .map_err(map_send_error)?;

        let project: Project = decode(response, "Error al crear proyecto").await?;
        Ok(project.into_normalized())
    }

    /// Update a project with a partial payload.
    pub async fn update(&self, project_id: &str, updates: &UpdateProject) -> Result<Project> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!(url = %url, project_id = %project_id, "Updating project");

        let response = self
            .http
            .put(&url)
            .header(AUTH_HEADER, self.token)
            .json(updates)
            .send()
            .await
            .map_err(map_send_error)?;

        let project: Project = decode(response, "Error al actualizar proyecto").await?;
        Ok(project.into_normalized())
    }

    /// Delete a project.
    ///
    /// Returns the server's confirmation payload, or `None` when the
    /// response had no body.
    pub async fn delete(&self, project_id: &str) -> Result<Option<DeleteConfirmation>> {
        let url = format!("{}/projects/{}", self.base_url, project_id);
        debug!(url = %url, project_id = %project_id, "Deleting project");

        let response = self
            .http
            .delete(&url)
            .header(AUTH_HEADER, self.token)
            .send()
            .await
            .map_err(map_send_error)?;

        decode(response, "Error al eliminar proyecto").await
    }
}
