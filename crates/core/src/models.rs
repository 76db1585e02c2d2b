//! Domain models mirrored from the hospital backend API.
//!
//! All of these are server-owned: the client reads them, renders them, and
//! at most requests mutation of `is_read` or deletion. No field is ever
//! invented or discarded client-side.

use serde::{Deserialize, Serialize};

use crate::types::{FeedbackId, Timestamp};

/// The authenticated administrator, from `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Role name, compared against [`crate::roles::ROLE_ADMIN`] before
    /// anything is rendered.
    pub role: String,
}

/// One patient feedback submission, from `GET /feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    /// Department the feedback is addressed to. Non-empty; the grouping key
    /// of the triage view.
    pub department: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: Timestamp,
    /// Whether an administrator has already seen this record. Missing on
    /// the wire means unread.
    #[serde(default)]
    pub is_read: bool,
}

/// Aggregate counters from `GET /stats`.
///
/// Pure passthrough: no derived invariants. Defaults to all zeros so the
/// dashboard never renders an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub registered_doctors: i64,
    #[serde(default)]
    pub total_patients: i64,
    #[serde(default)]
    pub total_appointments: i64,
}

/// One scheduled appointment, from `GET /appointments`.
///
/// Listed verbatim by the console; the client never mutates appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub department: String,
    pub scheduled_at: Timestamp,
    pub status: String,
}

/// The three dashboard counters at the moment of last fetch.
///
/// `unread_feedback` is derived client-side from the fetched feedback list
/// (count of records with `is_read == false`), never trusted from a server
/// counter. `unread_messages` stays a server-reported scalar; the asymmetry
/// is deliberate and preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterSnapshot {
    pub unread_messages: i64,
    pub unread_feedback: i64,
    pub stats: StatsRecord,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
