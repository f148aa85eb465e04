//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the loading gate, route guards and user-aware components; written
//! only by the auth provider (`util::auth`) through [`AuthSnapshot::apply`].
//!
//! DESIGN
//! ======
//! `is_admin` is stored as its own flag rather than recomputed from
//! `user.role`. Guards treat the flags as the sole truth once loading has
//! finished.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Read-only view of the authentication state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_loading: bool,
}

/// An established session as handed to the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub is_admin: bool,
}

impl Session {
    /// Build a session for `user`, granting elevation when the backend
    /// reports the admin role. This is the only place the role is read.
    #[must_use]
    pub fn from_user(user: User) -> Self {
        let is_admin = user.role == Role::Admin;
        Self { user, is_admin }
    }
}

/// State transitions the provider can apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Login, registration or a restored token produced a session.
    SessionEstablished(Session),
    /// No session: nothing stored, restore failed, or the user logged out.
    SessionCleared,
}

impl AuthSnapshot {
    /// Snapshot at application start: resolving, nobody signed in.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            is_loading: true,
            ..Self::signed_out()
        }
    }

    /// Unauthenticated defaults with loading finished.
    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_admin: false,
            is_loading: false,
        }
    }

    /// Apply a provider event, returning the next snapshot.
    #[must_use]
    pub fn apply(&self, event: AuthEvent) -> Self {
        match event {
            AuthEvent::SessionEstablished(session) => Self {
                user: Some(session.user),
                is_authenticated: true,
                is_admin: session.is_admin,
                is_loading: false,
            },
            AuthEvent::SessionCleared => Self::signed_out(),
        }
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
