//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the view side of `routing::guard`. `GatedRoutes` is the
//! pathless parent of every route, so nothing below it (pages, guards,
//! redirects) is evaluated while auth is loading. `ProtectedRoute` and
//! `AdminRoute` are pathless parents that either pass through to their
//! child routes via `<Outlet/>` or replace the navigation.
//!
//! Decisions are memoized so unrelated snapshot changes (a refreshed user
//! record, say) do not remount the nested routes.

#[cfg(all(test, feature = "ssr"))]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::components::loading_spinner::LoadingSpinner;
use crate::routing::guard::{self, Gate, GuardDecision};
use crate::util::auth::use_auth;

/// Render `children` only once auth state has resolved.
#[component]
pub fn LoadingGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let resolved = Memo::new(move |_| guard::loading_gate(&auth.get()) == Gate::Resolved);

    view! {
        <Show
            when=move || resolved.get()
            fallback=|| view! {
                <div class="loading-screen">
                    <LoadingSpinner size="lg"/>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Pathless parent wrapping the whole route tree in the loading gate.
#[component]
pub fn GatedRoutes() -> impl IntoView {
    view! {
        <LoadingGate>
            <Outlet/>
        </LoadingGate>
    }
}

/// Child routes render only with a session; otherwise go to `/login`.
#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guard::authenticated(&auth.get()));
    move || decision_view(decision.get())
}

/// Child routes render only with the admin flag; otherwise go to
/// `/dashboard`.
#[component]
pub fn AdminRoute() -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guard::admin(&auth.get()));
    move || decision_view(decision.get())
}

fn decision_view(decision: GuardDecision) -> AnyView {
    match decision {
        GuardDecision::Render => view! { <Outlet/> }.into_any(),
        GuardDecision::Redirect(target) => view! { <Redirect path=target options=replace()/> }.into_any(),
    }
}

/// Guard redirects replace the attempted entry rather than stacking on it.
pub(crate) fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}
