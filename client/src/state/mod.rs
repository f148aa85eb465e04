//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types here are plain data with pure transitions; the reactive
//! wrappers that own them live next to their providers in `util`.

pub mod auth;
