//! Server-side render harness for guard and route components.
//!
//! Renders a view to HTML at a given request path with the auth context
//! pinned to a snapshot, and records any `<Redirect/>` the render issued.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_meta::provide_meta_context;
use leptos_router::components::provide_server_redirect;
use leptos_router::location::RequestUrl;

use crate::net::types::{Role, User};
use crate::state::auth::AuthSnapshot;
use crate::util::auth::provide_auth_snapshot;

pub(crate) struct ServerRender {
    pub html: String,
    /// Target of the redirect issued during the render, if any.
    pub redirect: Option<String>,
}

/// A settled snapshot; `role` of `None` means no user record.
pub(crate) fn settled(is_authenticated: bool, is_admin: bool, role: Option<Role>) -> AuthSnapshot {
    AuthSnapshot {
        user: role.map(|role| User {
            id: "u-1".to_owned(),
            email: "someone@example.com".to_owned(),
            role,
            name: None,
        }),
        is_authenticated,
        is_admin,
        is_loading: false,
    }
}

pub(crate) fn render_at<F, V>(path: &str, snapshot: AuthSnapshot, view: F) -> ServerRender
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| {
        let redirect = Arc::new(Mutex::new(None::<String>));
        let slot = Arc::clone(&redirect);

        provide_meta_context();
        provide_context(RequestUrl::new(path));
        provide_server_redirect(move |to| *slot.lock().unwrap() = Some(to.to_owned()));
        provide_auth_snapshot(snapshot);

        let html = view().to_html();
        let redirect = redirect.lock().unwrap().clone();
        ServerRender { html, redirect }
    })
}
