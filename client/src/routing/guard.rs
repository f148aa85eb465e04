//! Access predicates evaluated per navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `loading_gate` runs first and suppresses the whole route tree while the
//! provider is resolving. Only after it reports [`Gate::Resolved`] are the
//! guards below evaluated, each a pure function of the latest snapshot.
//!
//! Guards read `is_authenticated` / `is_admin` only. `user.role` is
//! informational and never consulted here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::paths;
use crate::state::auth::AuthSnapshot;

/// Outcome of a single guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the nested subtree in place.
    Render,
    /// Replace the current navigation with this path.
    Redirect(&'static str),
}

/// Phase reported by the loading gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Auth state is indeterminate; render only the placeholder.
    Loading,
    /// Auth state is final; the router may run.
    Resolved,
}

/// A capability requirement attached to a subtree of routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Authenticated,
    Admin,
}

impl Guard {
    #[must_use]
    pub fn check(self, snapshot: &AuthSnapshot) -> GuardDecision {
        match self {
            Self::Authenticated => authenticated(snapshot),
            Self::Admin => admin(snapshot),
        }
    }
}

#[must_use]
pub fn loading_gate(snapshot: &AuthSnapshot) -> Gate {
    if snapshot.is_loading { Gate::Loading } else { Gate::Resolved }
}

/// Require a session. Failing navigations go to the login page with no
/// return-to memory.
#[must_use]
pub fn authenticated(snapshot: &AuthSnapshot) -> GuardDecision {
    if snapshot.is_authenticated {
        GuardDecision::Render
    } else {
        log::debug!("no session, redirecting to {}", paths::LOGIN);
        GuardDecision::Redirect(paths::LOGIN)
    }
}

/// Require the elevation flag. Failing navigations go to the dashboard, not
/// login: this guard sits inside the authenticated one and does not check
/// `is_authenticated` itself.
#[must_use]
pub fn admin(snapshot: &AuthSnapshot) -> GuardDecision {
    if snapshot.is_admin {
        GuardDecision::Render
    } else {
        log::debug!("not an admin, redirecting to {}", paths::DASHBOARD);
        GuardDecision::Redirect(paths::DASHBOARD)
    }
}
