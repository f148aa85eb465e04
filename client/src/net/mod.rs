//! Networking modules for the shop's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth HTTP calls and `types` defines the wire schema
//! shared with the backend.

pub mod api;
pub mod types;
