//! `caredesk-console` library crate.
//!
//! Holds the rendering and interaction modules shared by the binary and
//! its tests. The entrypoint lives in `main.rs`.

pub mod render;
pub mod session;
pub mod watch;
