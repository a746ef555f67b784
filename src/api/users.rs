//! User endpoints.

use reqwest::Method;

use super::types::User;
use super::{ApiClient, ApiError, Credentials, Endpoint};

const FETCH_USERS: Endpoint = Endpoint { name: "fetch users", fallback: "Failed to fetch users" };

impl ApiClient {
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call is rejected or the list does not
    /// decode.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.request(Method::GET, "/api/users", None, Credentials::Session, FETCH_USERS)
            .await
    }
}
