//! Route guards deciding, from the session alone, whether a page may render.

use crate::models::UserSession;

/// Landing page for signed-in users.
pub const HOME_PATH: &str = "/";

/// Where anonymous visitors of protected pages are sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page unmodified.
    Render,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// Guard of the login page: signed-in users have nothing to do there.
#[must_use]
pub fn guard_login(session: &UserSession) -> GuardDecision {
    if session.is_authenticated {
        GuardDecision::Redirect(HOME_PATH)
    } else {
        GuardDecision::Render
    }
}

/// Guard of pages that need a session.
#[must_use]
pub fn guard_protected(session: &UserSession) -> GuardDecision {
    if session.is_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}
