//! Asynchronous driver that connects the reducer to a gateway.
//!
//! [`Dashboard`] owns the state and a [`Gateway`] handle. User actions
//! and poll ticks become events; the reducer decides what to do; this
//! module runs the resulting effects and feeds their completions back
//! in. All failure handling lives here, following one policy: log and
//! keep the last good value. The appointments table is the only surface
//! that reports fetch failure to the user, and it is read directly off
//! the gateway rather than held in dashboard state.

use std::collections::VecDeque;
use std::sync::Arc;

use caredesk_core::error::FetchError;
use caredesk_core::gateway::Gateway;
use caredesk_core::models::Appointment;

use crate::composer::{compose, DashboardView};
use crate::reducer::{apply, DashboardEvent, Effect, FetchIntent};
use crate::state::DashboardState;

/// One admin dashboard session.
pub struct Dashboard {
    state: DashboardState,
    gateway: Arc<dyn Gateway>,
}

impl Dashboard {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            state: DashboardState::default(),
            gateway,
        }
    }

    /// Current raw state, for inspection.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Compose the current view model, or `None` when the role gate says
    /// nothing may render.
    pub fn view(&self) -> Option<DashboardView> {
        compose(&self.state)
    }

    /// Activation or poll tick: refresh identity, stats and both unread
    /// counters. The four fetches run concurrently and are independently
    /// fallible; whichever succeed are applied, the rest keep their last
    /// values.
    pub async fn refresh_all(&mut self) {
        let effects = apply(&mut self.state, DashboardEvent::RefreshRequested);
        // The reducer only asks for a feedback fetch while the panel is
        // closed; run it alongside the counter fetches instead of after.
        let feedback_generation = effects.iter().find_map(|effect| match effect {
            Effect::FetchFeedback { generation, .. } => Some(*generation),
            _ => None,
        });

        let (identity, stats, unread, feedback) = tokio::join!(
            self.gateway.fetch_identity(),
            self.gateway.fetch_stats(),
            self.gateway.fetch_unread_messages(),
            async {
                match feedback_generation {
                    Some(generation) => Some((generation, self.gateway.list_feedback().await)),
                    None => None,
                }
            },
        );

        match identity {
            Ok(identity) => self.dispatch(DashboardEvent::IdentityLoaded(identity)).await,
            Err(e) => tracing::warn!(error = %e, "Identity refresh failed, keeping last value"),
        }
        match stats {
            Ok(stats) => self.dispatch(DashboardEvent::StatsLoaded(stats)).await,
            Err(e) => tracing::warn!(error = %e, "Stats refresh failed, keeping last value"),
        }
        match unread {
            Ok(count) => {
                self.dispatch(DashboardEvent::UnreadMessagesLoaded(count))
                    .await
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unread message count refresh failed, keeping last value")
            }
        }
        match feedback {
            Some((generation, Ok(list))) => {
                self.dispatch(DashboardEvent::FeedbackRefreshed { generation, list })
                    .await
            }
            Some((_, Err(e))) => {
                tracing::warn!(error = %e, "Feedback refresh failed, keeping last value")
            }
            None => {}
        }
    }

    /// Open the feedback panel: fetch the list and, once it has arrived,
    /// mark all feedback read. If the fetch fails the panel stays closed
    /// and nothing is marked.
    pub async fn open_feedback_panel(&mut self) {
        self.dispatch(DashboardEvent::OpenRequested).await;
    }

    /// Close the feedback panel. Cache and badge are left as they are.
    pub async fn close_feedback_panel(&mut self) {
        self.dispatch(DashboardEvent::PanelClosed).await;
    }

    /// Change the department search term. Only meaningful while the
    /// panel is open.
    pub async fn search_feedback(&mut self, term: &str) {
        self.dispatch(DashboardEvent::SearchChanged(term.to_string()))
            .await;
    }

    /// Delete one feedback record. The local copy goes first; the server
    /// request follows and is not rolled back on failure.
    pub async fn delete_feedback(&mut self, id: &str) {
        self.dispatch(DashboardEvent::DeleteRequested(id.to_string()))
            .await;
    }

    /// Fetch the appointments list. Not cached: the caller surfaces
    /// failures to the user, unlike every other fetch on the dashboard.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, FetchError> {
        self.gateway.list_appointments().await
    }

    /// Feed one event through the reducer, run the effects it returns,
    /// and keep going until the completion events settle.
    async fn dispatch(&mut self, event: DashboardEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in apply(&mut self.state, event) {
                if let Some(completion) = self.run_effect(effect).await {
                    queue.push_back(completion);
                }
            }
        }
    }

    /// Run one effect against the gateway and return the completion
    /// event to dispatch, if any.
    async fn run_effect(&self, effect: Effect) -> Option<DashboardEvent> {
        match effect {
            Effect::FetchFeedback { generation, intent } => {
                match self.gateway.list_feedback().await {
                    Ok(list) => Some(match intent {
                        FetchIntent::RefreshBadge => {
                            DashboardEvent::FeedbackRefreshed { generation, list }
                        }
                        FetchIntent::OpenPanel => DashboardEvent::PanelOpened { generation, list },
                    }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Feedback fetch failed, keeping last view");
                        None
                    }
                }
            }
            Effect::MarkAllFeedbackRead => {
                if let Err(e) = self.gateway.mark_all_feedback_read().await {
                    // The badge already shows zero; the server catches up
                    // on the next successful open.
                    tracing::warn!(error = %e, "Mark-all-read failed, server unread state lags");
                }
                None
            }
            Effect::DeleteFeedback(id) => {
                if let Err(e) = self.gateway.delete_feedback(&id).await {
                    tracing::warn!(error = %e, id = %id, "Feedback delete failed, record stays removed locally");
                }
                None
            }
        }
    }
}
