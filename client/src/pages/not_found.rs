//! Fallback for unmatched paths. No guard applies.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routing::paths;
use crate::routing::table::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=Page::NotFound.title()/>
        <section class="page page--not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <A href=paths::DASHBOARD>"Go to dashboard"</A>
        </section>
    }
}
