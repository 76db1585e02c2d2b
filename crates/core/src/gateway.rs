//! The remote-data gateway contract.
//!
//! Everything the dashboard knows about the network is this trait: typed
//! reads plus the two feedback mutations, each returning
//! `Result<T, FetchError>`. The production implementation lives in
//! `caredesk-gateway`; tests substitute their own. Credentials never cross
//! this boundary; the implementation injects the bearer token itself.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{AdminIdentity, Appointment, FeedbackRecord, StatsRecord};

/// Authenticated access to the hospital backend API.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /users/me`: the authenticated administrator.
    async fn fetch_identity(&self) -> Result<AdminIdentity, FetchError>;

    /// `GET /stats`: aggregate dashboard counters.
    async fn fetch_stats(&self) -> Result<StatsRecord, FetchError>;

    /// `GET /messages/unread-count`: scalar unread-message count.
    async fn fetch_unread_messages(&self) -> Result<i64, FetchError>;

    /// `GET /feedback`: the full feedback list, in server order.
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, FetchError>;

    /// `PATCH /feedback/mark-as-read`: mark every feedback record read.
    async fn mark_all_feedback_read(&self) -> Result<(), FetchError>;

    /// `DELETE /feedback/{id}`: remove one feedback record.
    async fn delete_feedback(&self, id: &str) -> Result<(), FetchError>;

    /// `GET /appointments`: the appointment list.
    async fn list_appointments(&self) -> Result<Vec<Appointment>, FetchError>;
}
