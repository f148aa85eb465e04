//! Auth state provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` is called once by the root component. It owns the only
//! writable handle on the [`AuthSnapshot`] signal; everything else reaches
//! the state through [`use_auth`] and reads it with [`AuthContext::get`].
//!
//! Session restore (hydrate only) starts with the snapshot loading, reads the
//! stored token, validates it against `/auth/me`, and then settles the
//! snapshot exactly once. Until then the loading gate keeps every guard idle.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiError};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::routing::paths;
use crate::state::auth::{AuthEvent, AuthSnapshot, Session};
use crate::util::token_store;

/// Capability handle on the shared auth state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthSnapshot>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(AuthSnapshot::initial()),
        }
    }

    /// Current snapshot; tracked when called inside a reactive scope.
    pub fn get(self) -> AuthSnapshot {
        self.state.get()
    }

    fn apply(self, event: AuthEvent) {
        self.state.update(|state| *state = state.apply(event));
    }

    /// Sign in with email and password, persisting the returned token.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the snapshot is left as it was.
    pub async fn login(self, email: String, password: String) -> Result<(), ApiError> {
        let resp = api::login(&LoginRequest { email, password }).await?;
        self.establish(resp);
        Ok(())
    }

    /// Create an account and sign straight into it.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; the snapshot is left as it was.
    pub async fn register(self, email: String, password: String, name: Option<String>) -> Result<(), ApiError> {
        let resp = api::register(&RegisterRequest { email, password, name }).await?;
        self.establish(resp);
        Ok(())
    }

    /// Drop the session locally right away, then tell the backend.
    pub async fn logout(self) {
        let token = token_store::load();
        token_store::clear();
        self.apply(AuthEvent::SessionCleared);
        log::info!("signed out");
        if let Some(token) = token {
            api::logout(&token).await;
        }
    }

    fn establish(self, resp: AuthResponse) {
        token_store::save(&resp.token);
        log::info!("signed in as {}", resp.user.email);
        self.apply(AuthEvent::SessionEstablished(Session::from_user(resp.user)));
    }

    /// Resolve the initial snapshot from the stored token.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    async fn restore(self) {
        let event = match token_store::load() {
            None => AuthEvent::SessionCleared,
            Some(token) => restore_event(api::fetch_current_user(&token).await),
        };
        self.apply(event);
    }
}

/// Map the outcome of validating a stored token to a snapshot transition.
/// A rejected token is removed so the next start does not retry it.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn restore_event(result: Result<User, ApiError>) -> AuthEvent {
    match result {
        Ok(user) => {
            log::info!("restored session for {}", user.email);
            AuthEvent::SessionEstablished(Session::from_user(user))
        }
        Err(e) => {
            if e.is_unauthorized() {
                token_store::clear();
            }
            log::warn!("session restore failed: {e}");
            AuthEvent::SessionCleared
        }
    }
}

/// Create the auth state, provide it as context, and start session restore.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(auth.restore());

    auth
}

/// Provide an auth context already settled to `snapshot`.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn provide_auth_snapshot(snapshot: AuthSnapshot) -> AuthContext {
    let auth = AuthContext {
        state: RwSignal::new(snapshot),
    };
    provide_context(auth);
    auth
}

/// The auth handle provided by the root component.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// True once auth has resolved to a signed-in user; the login and register
/// pages use this to step aside.
pub fn should_leave_auth_page(state: &AuthSnapshot) -> bool {
    !state.is_loading && state.is_authenticated
}

/// Send signed-in users from an auth page to the dashboard. Also covers the
/// moment a login or registration on that page succeeds.
pub fn install_signed_in_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_auth_page(&auth.get()) {
            navigate(
                paths::DASHBOARD,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
