//! Application shell for signed-in pages: header, navigation, content slot.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::routing::paths;
use crate::routing::table::app_routes;
use crate::util::auth::use_auth;

/// Header with the navigation links the current user may follow, plus a
/// logout button. Child routes render in the `<main>` slot.
#[component]
pub fn Layout() -> impl IntoView {
    let auth = use_auth();

    let links = move || {
        app_routes()
            .nav_links(&auth.get())
            .into_iter()
            .map(|link| view! { <A href=link.href attr:class="layout__nav-link">{link.label}</A> })
            .collect_view()
    };
    let display_name = move || {
        auth.get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };
    let on_logout = move |_| leptos::task::spawn_local(auth.logout());

    view! {
        <div class="layout">
            <header class="layout__header">
                <A href=paths::DASHBOARD attr:class="layout__brand">"Sweet Shop"</A>
                <nav class="layout__nav">{links}</nav>
                <div class="layout__user">
                    <span class="layout__user-name">{display_name}</span>
                    <button class="btn btn--ghost" on:click=on_logout>"Log out"</button>
                </div>
            </header>
            <main class="layout__main">
                <Outlet/>
            </main>
        </div>
    }
}
