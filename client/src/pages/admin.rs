//! Admin-only catalog management pages. Reached only through `AdminRoute`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::routing::paths;
use crate::routing::table::Page;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <Title text=Page::AdminDashboard.title()/>
        <section class="page page--admin">
            <h1>"Admin"</h1>
            <A href=paths::ADMIN_SWEET_NEW attr:class="btn btn--primary">"Add sweet"</A>
        </section>
    }
}

#[component]
pub fn AddSweetPage() -> impl IntoView {
    view! {
        <Title text=Page::AddSweet.title()/>
        <section class="page page--sweet-form">
            <h1>"Add sweet"</h1>
            <A href=paths::ADMIN>"Back to admin"</A>
        </section>
    }
}

#[component]
pub fn EditSweetPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());
    let detail_href = move || paths::sweet_detail(&id());

    view! {
        <Title text=Page::EditSweet.title()/>
        <section class="page page--sweet-form">
            <h1>"Edit sweet " {id}</h1>
            <a href=detail_href>"View sweet"</a>
            " "
            <A href=paths::ADMIN>"Back to admin"</A>
        </section>
    }
}
