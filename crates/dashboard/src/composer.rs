//! Assembly of the read-only view model handed to presentation.
//!
//! Composition is where the authorization gate lives: no identity, or an
//! identity without the admin role, composes to nothing at all. The gate
//! runs on every call, so an identity refresh that demotes the account
//! blanks the dashboard on the very next render.

use serde::Serialize;

use caredesk_core::models::{AdminIdentity, CounterSnapshot};
use caredesk_core::roles::ROLE_ADMIN;
use caredesk_core::triage::{categorize, DepartmentGroup};

use crate::state::DashboardState;

/// Everything presentation needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// The signed-in admin.
    pub identity: AdminIdentity,
    /// Badge and stats values.
    pub counters: CounterSnapshot,
    /// Whether the feedback panel is shown.
    pub panel_open: bool,
    /// Department-grouped feedback under the current search term. Empty
    /// while the panel is closed.
    pub feedback: Vec<DepartmentGroup>,
}

/// Build the view for the current state, or `None` when nothing may be
/// rendered.
pub fn compose(state: &DashboardState) -> Option<DashboardView> {
    let identity = state.identity.as_ref()?;
    if identity.role != ROLE_ADMIN {
        return None;
    }
    let feedback = if state.triage.panel_open {
        categorize(&state.triage.cache, &state.triage.search_term)
    } else {
        Vec::new()
    };
    Some(DashboardView {
        identity: identity.clone(),
        counters: state.counters(),
        panel_open: state.triage.panel_open,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use caredesk_core::models::FeedbackRecord;
    use chrono::{TimeZone, Utc};

    fn identity(role: &str) -> AdminIdentity {
        AdminIdentity {
            id: 7,
            name: "Asha Rahman".to_string(),
            email: "asha@hospital.example".to_string(),
            role: role.to_string(),
        }
    }

    fn record(id: &str, department: &str) -> FeedbackRecord {
        FeedbackRecord {
            id: id.to_string(),
            department: department.to_string(),
            name: "Test Patient".to_string(),
            email: "patient@example.com".to_string(),
            message: "Some feedback".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            is_read: false,
        }
    }

    #[test]
    fn composes_nothing_without_an_identity() {
        let state = DashboardState::default();
        assert_eq!(compose(&state), None);
    }

    #[test]
    fn composes_nothing_for_non_admin_roles() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("doctor"));
        assert_eq!(compose(&state), None);
    }

    #[test]
    fn a_demoted_identity_blanks_the_next_render() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("admin"));
        assert!(compose(&state).is_some());

        state.identity = Some(identity("patient"));
        assert_eq!(compose(&state), None);
    }

    #[test]
    fn tolerates_partial_data_with_defaults() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("admin"));

        let view = compose(&state).expect("admin should see a view");
        assert_eq!(view.counters.unread_messages, 0);
        assert_eq!(view.counters.unread_feedback, 0);
        assert_eq!(view.counters.stats.total_users, 0);
        assert!(!view.panel_open);
        assert!(view.feedback.is_empty());
    }

    #[test]
    fn feedback_groups_appear_only_while_the_panel_is_open() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("admin"));
        state.triage.cache = vec![record("1", "Cardiology"), record("2", "Neurology")];

        let closed = compose(&state).expect("view");
        assert!(closed.feedback.is_empty());

        state.triage.panel_open = true;
        let open = compose(&state).expect("view");
        assert_eq!(open.feedback.len(), 2);
        assert_eq!(open.feedback[0].department, "Cardiology");
    }

    #[test]
    fn search_term_filters_the_composed_groups() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("admin"));
        state.triage.panel_open = true;
        state.triage.cache = vec![record("1", "Cardiology"), record("2", "Neurology")];
        state.triage.search_term = "cardio".to_string();

        let view = compose(&state).expect("view");
        assert_eq!(view.feedback.len(), 1);
        assert_eq!(view.feedback[0].department, "Cardiology");
    }

    #[test]
    fn counters_reflect_current_state() {
        let mut state = DashboardState::default();
        state.identity = Some(identity("admin"));
        state.unread_messages = 4;
        state.triage.unread_feedback = 2;
        state.stats.total_users = 120;

        let view = compose(&state).expect("view");
        assert_eq!(view.counters.unread_messages, 4);
        assert_eq!(view.counters.unread_feedback, 2);
        assert_eq!(view.counters.stats.total_users, 120);
    }
}
