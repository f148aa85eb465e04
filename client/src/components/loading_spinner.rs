//! Neutral placeholder shown while something is still resolving.

use leptos::prelude::*;

/// Spinner sized by modifier class (`sm`, `md`, `lg`).
#[component]
pub fn LoadingSpinner(#[prop(default = "md")] size: &'static str) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <span class=format!("loading-spinner__wheel loading-spinner__wheel--{size}")></span>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
