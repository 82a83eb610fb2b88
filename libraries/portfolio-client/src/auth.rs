//! Authentication endpoints of the Portfolio API.

use crate::error::Result;
use crate::response::{decode, map_send_error};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest};
use portfolio_core::UserSummary;
use reqwest::Client;
use tracing::{debug, info};

/// Authentication client for the Portfolio API.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Register a new user.
    ///
    /// The API requires a 6-digit `itson_id` and a password of at
    /// least 6 characters; both are caller-side validations and are
    /// forwarded as-is here.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        itson_id: &str,
        password: &str,
    ) -> Result<UserSummary> {
        let url = format!("{}/auth/register", self.base_url);
        debug!(url = %url, email = %email, "Registering user");

        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            itson_id: itson_id.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let user: UserSummary = decode(response, "Error al registrar").await?;
        Ok(user.into_normalized())
    }

    /// Login with email and password.
    ///
    /// Returns the token and the user with its identifier normalized.
    /// Persisting the session is the caller's job; a failed login
    /// never reaches the store.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let mut login: LoginResponse = decode(response, "Error al iniciar sesión").await?;
        login.user = login.user.into_normalized();

        info!(user_id = %login.user.id, "Login successful");
        Ok(login)
    }
}
