//! Admin dashboard state machine for the hospital console.
//!
//! This crate holds the client-side logic of the notification and
//! feedback triage surface:
//!
//! - [`DashboardState`]: plain-value session state (counters, feedback
//!   cache, panel flags).
//! - [`apply`]: the pure reducer; every transition, including the
//!   stale-response races, runs through it.
//! - [`Dashboard`]: async driver that executes reducer effects against
//!   a [`caredesk_core::gateway::Gateway`].
//! - [`compose`]: read-only view assembly behind the admin role gate.

pub mod composer;
pub mod driver;
pub mod reducer;
pub mod state;

pub use composer::{compose, DashboardView};
pub use driver::Dashboard;
pub use reducer::{apply, DashboardEvent, Effect, FetchIntent};
pub use state::{DashboardState, TriageState};
