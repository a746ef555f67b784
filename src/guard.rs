//! Route guard for protected views.
//!
//! DESIGN
//! ======
//! A guard is mounted in `Checking` and settles exactly once into
//! `Authorized` or `Redirecting`. It does not poll: a token revoked on the
//! server is only noticed on the next mount or the next rejected API call.
//! Changing the admin requirement is the one way back to `Checking` short of
//! remounting.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::navigation::{LOGIN_PATH, NavigationKind, Navigator};
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting,
}

/// What a guarded view shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    Loading,
    Content(T),
    Empty,
}

#[derive(Debug)]
pub struct RouteGuard {
    require_admin: bool,
    state: GuardState,
}

impl RouteGuard {
    #[must_use]
    pub fn new(require_admin: bool) -> Self {
        Self { require_admin, state: GuardState::Checking }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    #[must_use]
    pub fn require_admin(&self) -> bool {
        self.require_admin
    }

    /// Change the admin requirement. A different value puts the guard back
    /// into `Checking` so the next `check` runs again.
    pub fn set_require_admin(&mut self, require_admin: bool) {
        if self.require_admin != require_admin {
            self.require_admin = require_admin;
            self.state = GuardState::Checking;
        }
    }

    /// Run the auth check if it has not settled yet.
    ///
    /// Redirects issue a client-side navigation to the login screen.
    pub fn check(&mut self, session: &SessionStore, navigator: &dyn Navigator) -> GuardState {
        if self.state != GuardState::Checking {
            return self.state;
        }

        let allowed = session.is_authenticated() && (!self.require_admin || session.is_admin());
        if allowed {
            tracing::debug!(require_admin = self.require_admin, "route authorized");
            self.state = GuardState::Authorized;
        } else {
            tracing::info!(require_admin = self.require_admin, "route requires login; redirecting");
            self.state = GuardState::Redirecting;
            navigator.navigate(LOGIN_PATH, NavigationKind::Client);
        }
        self.state
    }

    /// Render for the current state. `content` is only invoked once the
    /// guard has authorized the route.
    pub fn render<T>(&self, content: impl FnOnce() -> T) -> GuardView<T> {
        match self.state {
            GuardState::Checking => GuardView::Loading,
            GuardState::Authorized => GuardView::Content(content()),
            GuardState::Redirecting => GuardView::Empty,
        }
    }
}
