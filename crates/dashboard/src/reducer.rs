//! Event reducer for the dashboard state.
//!
//! Every state change goes through [`apply`]: the caller feeds in a
//! [`DashboardEvent`] and gets back the [`Effect`]s to run (network calls,
//! in practice). The function itself never performs I/O, so every
//! transition, including the race-prone ones, is testable with plain
//! values.
//!
//! Staleness is handled with a generation token. Each feedback fetch is
//! issued under the generation current at request time; completion events
//! carry that generation back, and [`apply`] drops any completion whose
//! generation is no longer current. Closing the panel bumps the
//! generation, which cancels whatever fetch may still be in flight.

use caredesk_core::models::{AdminIdentity, FeedbackRecord, StatsRecord};
use caredesk_core::triage::count_unread;
use caredesk_core::types::FeedbackId;

use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Events and effects
// ---------------------------------------------------------------------------

/// Why a feedback list fetch was started. Decides which completion event
/// the runner dispatches when the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchIntent {
    /// Background poll while the panel is closed, to refresh the badge.
    RefreshBadge,
    /// The user asked to open the panel.
    OpenPanel,
}

/// Inputs to [`apply`]. Loaded/Opened/Refreshed variants are completions
/// of earlier effects; the rest are user or timer actions.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// Identity fetch succeeded.
    IdentityLoaded(AdminIdentity),
    /// Stats fetch succeeded.
    StatsLoaded(StatsRecord),
    /// Unread-message count fetch succeeded. Negative counts are clamped
    /// to zero.
    UnreadMessagesLoaded(i64),
    /// Activation or poll tick. Starts a badge refresh unless the panel
    /// is open, in which case the cached list is the live view and is
    /// left alone.
    RefreshRequested,
    /// The user asked to open the feedback panel.
    OpenRequested,
    /// A badge-refresh fetch completed. Ignored when stale or when the
    /// panel has been opened since the fetch started.
    FeedbackRefreshed {
        generation: u64,
        list: Vec<FeedbackRecord>,
    },
    /// An open-panel fetch completed. Applying it replaces the cache,
    /// zeroes the badge, resets the search term, opens the panel, and
    /// requests mark-all-read. Ignored when stale, so a response from an
    /// abandoned open can never overwrite a newer session.
    PanelOpened {
        generation: u64,
        list: Vec<FeedbackRecord>,
    },
    /// The user closed the panel. Keeps the cache and badge as they are.
    PanelClosed,
    /// The user edited the department search term. No-op while closed.
    SearchChanged(String),
    /// The user asked to delete one feedback record. No-op while closed
    /// or when the id is not in the cache.
    DeleteRequested(FeedbackId),
}

/// Work for the caller to perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the feedback list, then dispatch the completion event named
    /// by `intent` carrying this `generation`.
    FetchFeedback { generation: u64, intent: FetchIntent },
    /// Tell the backend to mark all feedback read. Fire and forget; the
    /// badge is already zero by the time this is issued.
    MarkAllFeedbackRead,
    /// Tell the backend to delete one record. The cache entry is already
    /// gone; failures are not rolled back.
    DeleteFeedback(FeedbackId),
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Advance the dashboard by one event and return the effects to run.
///
/// Total over all `(state, event)` pairs: events that do not apply in the
/// current state (stale generations, actions on a closed panel) leave the
/// state untouched and return no effects.
pub fn apply(state: &mut DashboardState, event: DashboardEvent) -> Vec<Effect> {
    match event {
        DashboardEvent::IdentityLoaded(identity) => {
            state.identity = Some(identity);
            Vec::new()
        }
        DashboardEvent::StatsLoaded(stats) => {
            state.stats = stats;
            Vec::new()
        }
        DashboardEvent::UnreadMessagesLoaded(count) => {
            state.unread_messages = count.max(0);
            Vec::new()
        }
        DashboardEvent::RefreshRequested => {
            start_feedback_fetch(state, FetchIntent::RefreshBadge)
        }
        DashboardEvent::OpenRequested => start_feedback_fetch(state, FetchIntent::OpenPanel),
        DashboardEvent::FeedbackRefreshed { generation, list } => {
            if generation != state.triage.generation || state.triage.panel_open {
                return Vec::new();
            }
            state.triage.unread_feedback = count_unread(&list);
            state.triage.cache = list;
            Vec::new()
        }
        DashboardEvent::PanelOpened { generation, list } => {
            if generation != state.triage.generation || state.triage.panel_open {
                return Vec::new();
            }
            state.triage.cache = list;
            state.triage.unread_feedback = 0;
            state.triage.search_term.clear();
            state.triage.panel_open = true;
            // Mark-all-read is only requested here, after the list fetch
            // has resolved and under a generation that is still current,
            // so each open session marks at most once.
            vec![Effect::MarkAllFeedbackRead]
        }
        DashboardEvent::PanelClosed => {
            state.triage.panel_open = false;
            // Invalidate any in-flight fetch so its late response cannot
            // reopen or repopulate the panel.
            state.triage.generation += 1;
            Vec::new()
        }
        DashboardEvent::SearchChanged(term) => {
            if state.triage.panel_open {
                state.triage.search_term = term;
            }
            Vec::new()
        }
        DashboardEvent::DeleteRequested(id) => {
            if !state.triage.panel_open {
                return Vec::new();
            }
            let Some(index) = state.triage.cache.iter().position(|f| f.id == id) else {
                return Vec::new();
            };
            state.triage.cache.remove(index);
            vec![Effect::DeleteFeedback(id)]
        }
    }
}

/// Begin a feedback list fetch under a fresh generation. While the panel
/// is open the cached list is authoritative and no fetch is started.
fn start_feedback_fetch(state: &mut DashboardState, intent: FetchIntent) -> Vec<Effect> {
    if state.triage.panel_open {
        return Vec::new();
    }
    state.triage.generation += 1;
    vec![Effect::FetchFeedback {
        generation: state.triage.generation,
        intent,
    }]
}
