//! Default landing page for signed-in users.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routing::paths;
use crate::routing::table::Page;
use crate::util::auth::use_auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}!", u.display_name()))
            .unwrap_or_else(|| "Welcome!".to_owned())
    };

    view! {
        <Title text=Page::Dashboard.title()/>
        <section class="page page--dashboard">
            <h1>{greeting}</h1>
            <ul class="page__links">
                <li><A href=paths::SWEETS>"Browse sweets"</A></li>
                <li><A href=paths::HISTORY>"Your purchases"</A></li>
                <Show when=move || auth.get().is_admin>
                    <li><A href=paths::ADMIN>"Manage the catalog"</A></li>
                </Show>
            </ul>
        </section>
    }
}
