//! Navigation seam between auth decisions and whatever displays views.
//!
//! Logout performs a full navigation (the old page state is discarded),
//! while the route guard issues a client-side push. Both go through the
//! `Navigator` trait so callers decide what "navigate" means.

use std::sync::{Mutex, PoisonError};

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// In-app route change; the current view tree is replaced.
    Client,
    /// Full page load; all in-memory view state is dropped.
    Full,
}

pub trait Navigator {
    fn navigate(&self, path: &str, kind: NavigationKind);
}

/// Navigator that records every request instead of acting on it.
#[derive(Debug, Default)]
pub struct NavigationLog {
    entries: Mutex<Vec<(String, NavigationKind)>>,
}

impl NavigationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded navigations, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, NavigationKind)> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<(String, NavigationKind)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, path: &str, kind: NavigationKind) {
        tracing::debug!(path, ?kind, "navigation recorded");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_owned(), kind));
    }
}
