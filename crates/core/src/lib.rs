//! Domain types and pure triage logic for the caredesk admin console.
//!
//! This crate has no I/O: models mirrored from the backend API, the
//! [`gateway::Gateway`] contract the rest of the stack depends on, and the
//! pure functions behind the feedback triage view. All state handling and
//! networking live in the `caredesk-dashboard` and `caredesk-gateway`
//! crates.

pub mod error;
pub mod gateway;
pub mod models;
pub mod roles;
pub mod triage;
pub mod types;
