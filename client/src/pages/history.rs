//! The signed-in user's purchase history.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routing::table::Page;

#[component]
pub fn PurchaseHistoryPage() -> impl IntoView {
    view! {
        <Title text=Page::PurchaseHistory.title()/>
        <section class="page page--history">
            <h1>"Purchase history"</h1>
        </section>
    }
}
