//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! downloads, navigation) from page and component logic so the decision
//! logic can be tested natively.

pub mod clock;
pub mod csv;
pub mod download;
pub mod guard;
pub mod idle;
pub mod login_flow;
pub mod nav;
pub mod password;
pub mod pdf;
pub mod query;
pub mod request;
pub mod storage;
pub mod upload;
