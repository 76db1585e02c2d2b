//! Pure feedback-triage logic: unread derivation and the
//! department-partitioned, search-filtered view.
//!
//! Everything here is a pure function of its inputs. The triage view is
//! recomputed on every render from `(cache, search term)` and holds no
//! state of its own, so repeated calls with the same inputs yield
//! identical output.

use serde::Serialize;

use crate::models::FeedbackRecord;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// All feedback records addressed to one department, in fetch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentGroup {
    pub department: String,
    pub records: Vec<FeedbackRecord>,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Number of records not yet marked as read.
///
/// This is the unread-feedback badge value: always derived from the fetched
/// list, never taken from a server counter.
pub fn count_unread(records: &[FeedbackRecord]) -> i64 {
    records.iter().filter(|record| !record.is_read).count() as i64
}

/// Partition `records` by department, keeping only departments whose name
/// contains `search_term` (case-insensitive substring match).
///
/// Single pass; departments appear in first-seen order and records keep
/// fetch order within their group. The empty term matches every department.
/// Matching is over the department name only; message, name, and email
/// text are not searched.
pub fn categorize(records: &[FeedbackRecord], search_term: &str) -> Vec<DepartmentGroup> {
    let needle = search_term.to_lowercase();

    let mut groups: Vec<DepartmentGroup> = Vec::new();
    for record in records {
        if !record.department.to_lowercase().contains(&needle) {
            continue;
        }
        match groups
            .iter_mut()
            .find(|group| group.department == record.department)
        {
            Some(group) => group.records.push(record.clone()),
            None => groups.push(DepartmentGroup {
                department: record.department.clone(),
                records: vec![record.clone()],
            }),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, department: &str, is_read: bool) -> FeedbackRecord {
        FeedbackRecord {
            id: id.to_string(),
            department: department.to_string(),
            name: format!("Patient {id}"),
            email: format!("patient{id}@example.com"),
            message: "The waiting time was very long.".to_string(),
            submitted_at: chrono::Utc::now(),
            is_read,
        }
    }

    fn sample_cache() -> Vec<FeedbackRecord> {
        vec![
            record("1", "Cardiology", false),
            record("2", "Cardiology", true),
            record("3", "Neurology", false),
        ]
    }

    // -- count_unread ------------------------------------------------------

    #[test]
    fn count_unread_empty_list() {
        assert_eq!(count_unread(&[]), 0);
    }

    #[test]
    fn count_unread_counts_only_unread() {
        assert_eq!(count_unread(&sample_cache()), 2);
    }

    #[test]
    fn count_unread_all_read_is_zero() {
        let cache = vec![record("1", "Cardiology", true), record("2", "ENT", true)];
        assert_eq!(count_unread(&cache), 0);
    }

    // -- categorize: grouping ----------------------------------------------

    #[test]
    fn categorize_groups_by_department_in_first_seen_order() {
        let groups = categorize(&sample_cache(), "");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].department, "Cardiology");
        assert_eq!(groups[1].department, "Neurology");
        assert_eq!(groups[0].records[0].id, "1");
        assert_eq!(groups[0].records[1].id, "2");
        assert_eq!(groups[1].records[0].id, "3");
    }

    #[test]
    fn categorize_keeps_fetch_order_within_group() {
        let cache = vec![
            record("a", "ENT", false),
            record("b", "Cardiology", false),
            record("c", "ENT", false),
        ];
        let groups = categorize(&cache, "");

        assert_eq!(groups[0].department, "ENT");
        let ids: Vec<&str> = groups[0].records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn categorize_preserves_total_record_count() {
        let cache = sample_cache();
        let groups = categorize(&cache, "");

        let total: usize = groups.iter().map(|g| g.records.len()).sum();
        assert_eq!(total, cache.len());
    }

    #[test]
    fn categorize_empty_cache_yields_no_groups() {
        assert!(categorize(&[], "").is_empty());
    }

    // -- categorize: search filter -----------------------------------------

    #[test]
    fn search_is_case_insensitive_substring() {
        let groups = categorize(&sample_cache(), "cardio");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].department, "Cardiology");
        assert_eq!(groups[0].records.len(), 2);
    }

    #[test]
    fn search_matches_department_only_not_message_text() {
        let mut noisy = record("9", "Orthopedics", false);
        noisy.message = "cardiology referral please".to_string();
        let cache = vec![noisy, record("1", "Cardiology", false)];

        let groups = categorize(&cache, "cardio");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].department, "Cardiology");
    }

    #[test]
    fn search_with_no_match_yields_no_groups() {
        assert!(categorize(&sample_cache(), "radiology").is_empty());
    }

    #[test]
    fn empty_term_matches_every_department() {
        let groups = categorize(&sample_cache(), "");
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn filtered_view_is_subset_of_unfiltered() {
        let cache = sample_cache();
        let unfiltered = categorize(&cache, "");

        for term in ["cardio", "NEURO", "ology", "x"] {
            for group in categorize(&cache, term) {
                let full = unfiltered
                    .iter()
                    .find(|g| g.department == group.department)
                    .expect("filtered department must exist unfiltered");
                assert_eq!(full.records, group.records);
            }
        }
    }

    // -- categorize: determinism -------------------------------------------

    #[test]
    fn categorize_is_deterministic() {
        let cache = sample_cache();
        assert_eq!(categorize(&cache, ""), categorize(&cache, ""));
        assert_eq!(categorize(&cache, "cardio"), categorize(&cache, "cardio"));
    }

    #[test]
    fn categorize_does_not_mutate_input() {
        let cache = sample_cache();
        let before = cache.clone();
        let _ = categorize(&cache, "neuro");
        assert_eq!(cache, before);
    }
}
