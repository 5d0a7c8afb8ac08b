//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `users`, `monitoring`, etc.) so
//! pages depend on small focused models. Everything here is plain data with
//! pure transitions; pages wrap the shared pieces in `RwSignal`s.

pub mod collection;
pub mod monitoring;
pub mod projects;
pub mod session;
pub mod ui;
pub mod users;
