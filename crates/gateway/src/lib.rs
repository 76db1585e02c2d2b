//! HTTP implementation of the caredesk gateway contract.
//!
//! Wraps the hospital backend's REST API using [`reqwest`]: one shared
//! client with a bounded per-request timeout, bearer-token injection on
//! every call, and typed decoding into `caredesk-core` models.

pub mod http;

pub use http::{GatewayConfig, HttpGateway};
