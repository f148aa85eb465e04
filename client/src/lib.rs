//! # client
//!
//! Leptos + WASM front-end for the sweet shop. Rendered on the server for the
//! first paint and hydrated in the browser.
//!
//! This crate contains the route tree and its guards, the auth state
//! provider, pages, and the REST client for the shop's auth API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
