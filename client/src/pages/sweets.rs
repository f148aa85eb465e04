//! Catalog pages: the sweets list and a single sweet.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::routing::paths;
use crate::routing::table::Page;
use crate::util::auth::use_auth;

#[component]
pub fn SweetsListPage() -> impl IntoView {
    view! {
        <Title text=Page::Sweets.title()/>
        <section class="page page--sweets">
            <h1>"Sweets"</h1>
        </section>
    }
}

#[component]
pub fn SweetDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());
    let edit_href = move || paths::admin_sweet_edit(&id());

    view! {
        <Title text=Page::SweetDetail.title()/>
        <section class="page page--sweet-detail">
            <h1>"Sweet " {id}</h1>
            <A href=paths::SWEETS>"Back to all sweets"</A>
            <Show when=move || auth.get().is_admin>
                " "
                <a href=edit_href>"Edit"</a>
            </Show>
        </section>
    }
}
