//! Per-view session state for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! A protected view starts in `Loading`, runs one identity check on mount and
//! settles in `Authenticated` or `Unauthenticated`. There are no transitions
//! out of either terminal state; remounting the view starts over.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Outcome of the identity check for one mounted view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionView {
    #[default]
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl SessionView {
    /// Settle a check result. A missing user never keeps earlier user data.
    #[must_use]
    pub fn from_check(user: Option<SessionUser>) -> Self {
        user.map_or(Self::Unauthenticated, Self::Authenticated)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Profile heading, e.g. `Welcome alice`.
#[must_use]
pub fn welcome_text(user: &SessionUser) -> String {
    format!("Welcome {}", user.username)
}

/// Profile role line, e.g. `Role: player`.
#[must_use]
pub fn role_text(user: &SessionUser) -> String {
    format!("Role: {}", user.role)
}
