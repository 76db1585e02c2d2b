//! Plain-text rendering of dashboard data for the terminal.
//!
//! Every function here is pure: state in, `String` out. What gets shown
//! and when is decided by the callers; rendering never hits the network.

use std::fmt::Write;

use caredesk_core::models::Appointment;
use caredesk_dashboard::DashboardView;

/// User-facing message for a failed appointments fetch. Appointments are
/// the only dashboard surface that reports fetch failure to the user.
pub const APPOINTMENTS_FETCH_ERROR: &str =
    "Failed to fetch appointments. Please try again later.";

/// Render the signed-in header, unread counters and platform stats.
pub fn overview(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Signed in as {} <{}>",
        view.identity.name, view.identity.email
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  Unread messages {:>6}", view.counters.unread_messages);
    let _ = writeln!(out, "  Unread feedback {:>6}", view.counters.unread_feedback);
    let _ = writeln!(out);
    let stats = &view.counters.stats;
    let _ = writeln!(out, "  Users           {:>6}", stats.total_users);
    let _ = writeln!(out, "  Doctors         {:>6}", stats.registered_doctors);
    let _ = writeln!(out, "  Patients        {:>6}", stats.total_patients);
    let _ = writeln!(out, "  Appointments    {:>6}", stats.total_appointments);
    out
}

/// Render the department-grouped feedback panel. Records keep their
/// fetched order; unread ones are flagged with `*`.
pub fn feedback_panel(view: &DashboardView) -> String {
    if view.feedback.is_empty() {
        return "  (no feedback)\n".to_string();
    }
    let mut out = String::new();
    for group in &view.feedback {
        let _ = writeln!(out, "{} ({})", group.department, group.records.len());
        for record in &group.records {
            let marker = if record.is_read { ' ' } else { '*' };
            let _ = writeln!(
                out,
                " {} [{}] {} <{}>  {}",
                marker,
                record.id,
                record.name,
                record.email,
                record.submitted_at.format("%Y-%m-%d %H:%M"),
            );
            let _ = writeln!(out, "      {}", record.message);
        }
    }
    out
}

/// Render the appointments list, one line per appointment.
pub fn appointments_table(appointments: &[Appointment]) -> String {
    if appointments.is_empty() {
        return "  (no appointments)\n".to_string();
    }
    let mut out = String::new();
    for appointment in appointments {
        let _ = writeln!(
            out,
            "  #{:<5} {}  {} with {}  [{}]  {}",
            appointment.id,
            appointment.scheduled_at.format("%Y-%m-%d %H:%M"),
            appointment.patient_name,
            appointment.doctor_name,
            appointment.department,
            appointment.status,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};

    use caredesk_core::models::{
        AdminIdentity, Appointment, CounterSnapshot, FeedbackRecord, StatsRecord,
    };
    use caredesk_core::triage::DepartmentGroup;

    fn record(id: &str, is_read: bool) -> FeedbackRecord {
        FeedbackRecord {
            id: id.to_string(),
            department: "Cardiology".to_string(),
            name: "Nadia Osei".to_string(),
            email: "nadia@example.com".to_string(),
            message: "Very helpful staff.".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            is_read,
        }
    }

    fn view(feedback: Vec<DepartmentGroup>) -> DashboardView {
        DashboardView {
            identity: AdminIdentity {
                id: 7,
                name: "Asha Rahman".to_string(),
                email: "asha@hospital.example".to_string(),
                role: "admin".to_string(),
            },
            counters: CounterSnapshot {
                unread_messages: 4,
                unread_feedback: 2,
                stats: StatsRecord {
                    total_users: 120,
                    registered_doctors: 15,
                    total_patients: 400,
                    total_appointments: 58,
                },
            },
            panel_open: !feedback.is_empty(),
            feedback,
        }
    }

    // -- overview ----------------------------------------------------------

    #[test]
    fn overview_shows_identity_and_counters() {
        let text = overview(&view(Vec::new()));
        assert!(text.contains("Signed in as Asha Rahman <asha@hospital.example>"));
        assert!(text.contains("Unread messages      4"));
        assert!(text.contains("Unread feedback      2"));
        assert!(text.contains("Users              120"));
        assert!(text.contains("Appointments        58"));
    }

    // -- feedback panel ----------------------------------------------------

    #[test]
    fn feedback_panel_groups_and_flags_unread() {
        let groups = vec![DepartmentGroup {
            department: "Cardiology".to_string(),
            records: vec![record("fb-1", false), record("fb-2", true)],
        }];
        let text = feedback_panel(&view(groups));
        assert!(text.contains("Cardiology (2)"));
        assert!(text.contains(" * [fb-1] Nadia Osei <nadia@example.com>  2026-03-01 09:30"));
        assert!(text.contains("   [fb-2] Nadia Osei"));
        assert!(text.contains("      Very helpful staff."));
    }

    #[test]
    fn feedback_panel_handles_empty_view() {
        let text = feedback_panel(&view(Vec::new()));
        assert_eq!(text, "  (no feedback)\n");
    }

    // -- appointments ------------------------------------------------------

    #[test]
    fn appointments_table_lists_rows() {
        let appointments = vec![Appointment {
            id: 31,
            patient_name: "Leo Martin".to_string(),
            doctor_name: "Dr. Varga".to_string(),
            department: "Neurology".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2026, 3, 10, 11, 0, 0).unwrap(),
            status: "confirmed".to_string(),
        }];
        let text = appointments_table(&appointments);
        assert!(text.contains("#31"));
        assert!(text.contains("2026-03-10 11:00"));
        assert!(text.contains("Leo Martin with Dr. Varga"));
        assert!(text.contains("[Neurology]"));
        assert!(text.contains("confirmed"));
    }

    #[test]
    fn appointments_table_handles_empty_list() {
        assert_eq!(appointments_table(&[]), "  (no appointments)\n");
    }

    #[test]
    fn appointments_error_message_is_stable() {
        assert_eq!(
            APPOINTMENTS_FETCH_ERROR,
            "Failed to fetch appointments. Please try again later."
        );
    }
}
