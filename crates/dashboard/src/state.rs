//! In-memory state for one admin dashboard session.
//!
//! The state is a plain value mutated exclusively by
//! [`crate::reducer::apply`]. Fetched data is kept verbatim; anything
//! derived (unread totals, department grouping) is recomputed from it on
//! read so the two can never disagree.

use caredesk_core::models::{AdminIdentity, CounterSnapshot, FeedbackRecord, StatsRecord};

/// Everything the dashboard knows, across all panels.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Signed-in account, once the identity fetch has succeeded.
    pub identity: Option<AdminIdentity>,
    /// Most recent platform statistics. Stale values are kept on fetch
    /// failure, so this is always the last good snapshot.
    pub stats: StatsRecord,
    /// Unread direct-message count from the last successful poll.
    pub unread_messages: i64,
    /// Feedback triage panel.
    pub triage: TriageState,
}

/// State of the feedback triage panel.
#[derive(Debug, Default)]
pub struct TriageState {
    /// Whether the panel is currently displayed.
    pub panel_open: bool,
    /// Feedback records exactly as the backend last returned them, in
    /// server order. Display grouping is derived from this at read time.
    pub cache: Vec<FeedbackRecord>,
    /// Current department filter. An empty string matches everything.
    pub search_term: String,
    /// Unread-feedback badge value. Held separately from `cache`: opening
    /// the panel zeroes it before the server has confirmed mark-as-read,
    /// so at that point it intentionally disagrees with the records.
    pub unread_feedback: i64,
    /// Fetch generation. Bumped when a feedback fetch starts and when the
    /// panel closes; responses carrying an older generation are ignored.
    pub generation: u64,
}

impl DashboardState {
    /// Current badge values as one row.
    pub fn counters(&self) -> CounterSnapshot {
        CounterSnapshot {
            unread_messages: self.unread_messages,
            unread_feedback: self.triage.unread_feedback,
            stats: self.stats.clone(),
        }
    }
}
