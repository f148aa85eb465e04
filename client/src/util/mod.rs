//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the auth provider and the browser token store so pages
//! and components never touch storage or the API directly.

pub mod auth;
pub mod token_store;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod ssr_render;
