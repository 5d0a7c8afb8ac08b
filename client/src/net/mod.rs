//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes requests, `api` sends them, `types` defines the
//! wire schema, `audit` builds audit-trail entries, and `error` classifies
//! failures.

pub mod api;
pub mod audit;
pub mod endpoints;
pub mod error;
pub mod interfaces;
pub mod types;
