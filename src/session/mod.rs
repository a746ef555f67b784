//! Operator session: bearer token plus cached user profile.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single source of truth for "am I logged in, and as
//! whom". It is an explicit value wrapping an injected `SessionStorage`, so
//! callers share it as an `Arc` instead of reaching for ambient state.
//!
//! Validity is a presence check only. Expiry, signature and revocation are
//! left to the backend, which rejects stale tokens on the next call.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: unreadable storage or a malformed cached profile is
//! logged and read as absent. Writes surface `SessionError`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub mod storage;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::api::types::User;
use crate::navigation::{LOGIN_PATH, NavigationKind, Navigator};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";
pub const ADMIN_ROLE: &str = "ADMIN";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to encode user profile: {0}")]
    EncodeUser(#[from] serde_json::Error),
    #[error("stored token is not a valid header value")]
    InvalidToken,
}

pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open a session over `storage`, restoring whatever it holds.
    ///
    /// A cached profile without a token is dropped so the stored state never
    /// claims a user for an anonymous session.
    pub fn open(storage: impl SessionStorage + 'static) -> Self {
        let store = Self { storage: Box::new(storage) };

        match (store.token(), store.read(USER_KEY)) {
            (Some(_), _) => {
                tracing::info!(admin = store.is_admin(), "restored session");
            }
            (None, Some(_)) => {
                tracing::warn!("cached user without a token; dropping it");
                if let Err(e) = store.storage.remove(USER_KEY) {
                    tracing::warn!(error = %e, "failed to drop orphaned user profile");
                }
            }
            (None, None) => tracing::debug!("no stored session"),
        }

        store
    }

    /// Flush storage and release the session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the storage cannot be flushed.
    pub fn close(self) -> Result<(), SessionError> {
        self.storage.flush()?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "session storage read failed");
                None
            }
        }
    }

    /// Stored bearer token. An empty string counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// # Errors
    ///
    /// Returns a [`SessionError`] if the token cannot be persisted.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.storage.set(TOKEN_KEY, token)?;
        Ok(())
    }

    /// Remove the token and the cached profile together.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if either entry cannot be removed. The
    /// profile is removed even when removing the token fails.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token?;
        user?;
        Ok(())
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        let text = self.read(USER_KEY)?;
        match serde_json::from_str(&text) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "cached user profile is malformed");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns a [`SessionError`] if the profile cannot be encoded or stored.
    pub fn set_user(&self, user: &User) -> Result<(), SessionError> {
        let text = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &text)?;
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.role == ADMIN_ROLE)
    }

    /// End the session and send the operator to the login screen with a full
    /// navigation. The navigation happens even if clearing storage fails.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the stored entries cannot be removed.
    pub fn logout(&self, navigator: &dyn Navigator) -> Result<(), SessionError> {
        let cleared = self.clear();
        tracing::info!("logged out");
        navigator.navigate(LOGIN_PATH, NavigationKind::Full);
        cleared
    }

    /// Headers for an outgoing API call: JSON content type always, bearer
    /// authorization only when a token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidToken`] if the token cannot be sent as a
    /// header value.
    pub fn auth_headers(&self) -> Result<HeaderMap, SessionError> {
        let mut headers = json_headers();
        if let Some(token) = self.token() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| SessionError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

/// Headers for unauthenticated JSON calls.
#[must_use]
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
