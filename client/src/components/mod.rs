//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and the route guards, reading
//! auth state from the context provided by the root component.

pub mod guards;
pub mod layout;
pub mod loading_spinner;
