//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Catalog, purchase and admin
//! pages are placeholders outside this front-end's scope; only their place
//! in the guarded route tree matters here.

pub mod admin;
pub mod dashboard;
pub mod history;
pub mod login;
pub mod not_found;
pub mod register;
pub mod sweets;
