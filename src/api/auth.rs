//! Login against `/api/auth/login`.

use reqwest::Method;

use super::types::{LoginRequest, LoginResponse, User};
use super::{ApiClient, ApiError, Credentials, Endpoint, encode};

const LOGIN: Endpoint = Endpoint { name: "login", fallback: "Login failed" };

impl ApiClient {
    /// Exchange credentials for a session.
    ///
    /// On success the token and profile are stored in the session (token
    /// first) and the profile is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message when the
    /// credentials are refused, or another [`ApiError`] if the call, decode or
    /// session write fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = encode(&LoginRequest { email, password })?;
        let response: LoginResponse = self
            .request(Method::POST, "/api/auth/login", Some(body), Credentials::Anonymous, LOGIN)
            .await?;

        self.session().set_token(&response.token)?;
        if let Err(e) = self.session().set_user(&response.user) {
            // A token without its profile would leave the stored session half
            // written.
            if let Err(clear) = self.session().clear() {
                tracing::warn!(error = %clear, "failed to roll back token after profile write failed");
            }
            return Err(e.into());
        }
        tracing::info!(user_id = response.user.id, role = %response.user.role, "logged in");

        Ok(response.user)
    }
}
