//! Route-level access control.
//!
//! ARCHITECTURE
//! ============
//! `paths` holds the navigation constants, `guard` the per-navigation access
//! predicates, and `table` the declarative route tree those predicates attach
//! to. Components in `components::guards` are thin views over `guard`.

pub mod guard;
pub mod paths;
pub mod table;
