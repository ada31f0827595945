//! Presence-day calculation from calendar absence records.
//!
//! This module computes, for each member of a room, how many days within an
//! inclusive query range the member was not covered by an approved absence.
//! Overlapping absence intervals for the same member are merged before
//! counting, so a member with self-overlapping leave records is never
//! charged twice for the same day.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceInterval, MemberPresence};

/// Counts the days in the closed range `[start, end]`, both ends included.
///
/// # Example
///
/// ```
/// use split_engine::allocation::days_between_inclusive;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(days_between_inclusive(start, end), 10);
/// assert_eq!(days_between_inclusive(start, start), 1);
/// ```
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Computes per-member presence-day counts over an inclusive date range.
///
/// For each member, the member's absence intervals are clipped to the query
/// range, merged where they overlap, and summed into an absent-day count;
/// `present_days` is the remaining day count, floored at zero. Results are
/// returned in member order so they can feed the weighting stage directly.
/// Absence rows for ids outside `members` are ignored.
///
/// # Arguments
///
/// * `members` - The room members, in output order
/// * `absences` - Approved absence intervals for the room
/// * `range_start` - First day of the query range (inclusive)
/// * `range_end` - Last day of the query range (inclusive)
///
/// # Returns
///
/// One [`MemberPresence`] per member, or an error if the query range or any
/// absence interval is reversed.
///
/// # Example
///
/// ```
/// use split_engine::allocation::calculate_presence_days;
/// use split_engine::models::AbsenceInterval;
/// use chrono::NaiveDate;
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let members = vec!["x".to_string()];
/// let absences = vec![AbsenceInterval {
///     member_id: "x".to_string(),
///     start: date("2024-01-03"),
///     end: date("2024-01-04"),
/// }];
///
/// let presences =
///     calculate_presence_days(&members, &absences, date("2024-01-01"), date("2024-01-10"))
///         .unwrap();
/// assert_eq!(presences[0].present_days, 8);
/// ```
pub fn calculate_presence_days(
    members: &[String],
    absences: &[AbsenceInterval],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> EngineResult<Vec<MemberPresence>> {
    if range_start > range_end {
        return Err(EngineError::InvalidDateRange {
            start: range_start,
            end: range_end,
        });
    }
    for absence in absences {
        absence.validate()?;
    }

    let total_days = days_between_inclusive(range_start, range_end);

    let presences = members
        .iter()
        .map(|member_id| {
            let absent_days = absent_days_for(member_id, absences, range_start, range_end);
            MemberPresence {
                member_id: member_id.clone(),
                total_days,
                absent_days,
                present_days: (total_days - absent_days).max(0),
            }
        })
        .collect();

    Ok(presences)
}

/// Sums the merged, range-clipped absence days for one member.
fn absent_days_for(
    member_id: &str,
    absences: &[AbsenceInterval],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> i64 {
    let mut clipped: Vec<(NaiveDate, NaiveDate)> = absences
        .iter()
        .filter(|a| a.member_id == member_id)
        .filter_map(|a| a.clip(range_start, range_end))
        .collect();
    clipped.sort();

    let mut absent_days = 0;
    let mut current: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in clipped {
        match current {
            Some((merged_start, merged_end)) if start <= merged_end => {
                current = Some((merged_start, merged_end.max(end)));
            }
            Some((merged_start, merged_end)) => {
                absent_days += days_between_inclusive(merged_start, merged_end);
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((merged_start, merged_end)) = current {
        absent_days += days_between_inclusive(merged_start, merged_end);
    }

    absent_days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn interval(member: &str, start: &str, end: &str) -> AbsenceInterval {
        AbsenceInterval {
            member_id: member.to_string(),
            start: make_date(start),
            end: make_date(end),
        }
    }

    fn members(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    /// PD-001: inclusive day counting
    #[test]
    fn test_pd_001_days_between_inclusive() {
        assert_eq!(
            days_between_inclusive(make_date("2024-01-01"), make_date("2024-01-10")),
            10
        );
        assert_eq!(
            days_between_inclusive(make_date("2024-01-01"), make_date("2024-01-01")),
            1
        );
        assert_eq!(
            days_between_inclusive(make_date("2024-01-31"), make_date("2024-02-01")),
            2
        );
    }

    /// PD-002: a two-day absence within a ten-day range leaves eight present days
    #[test]
    fn test_pd_002_basic_absence_within_range() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2024-01-03", "2024-01-04")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences.len(), 1);
        assert_eq!(presences[0].total_days, 10);
        assert_eq!(presences[0].absent_days, 2);
        assert_eq!(presences[0].present_days, 8);
    }

    /// PD-003: absence intervals are clipped to the query range
    #[test]
    fn test_pd_003_absence_clipped_to_range() {
        // Absence runs 2023-12-28 to 2024-01-03; only 3 days fall in range.
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2023-12-28", "2024-01-03")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 3);
        assert_eq!(presences[0].present_days, 7);
    }

    /// PD-004: absences outside the range are ignored
    #[test]
    fn test_pd_004_absence_outside_range_ignored() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2024-02-01", "2024-02-10")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 0);
        assert_eq!(presences[0].present_days, 10);
    }

    /// PD-005: overlapping intervals for one member are merged, not double-counted
    #[test]
    fn test_pd_005_overlapping_intervals_merged() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[
                interval("x", "2024-01-02", "2024-01-05"),
                interval("x", "2024-01-04", "2024-01-08"),
            ],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        // Merged span is 01-02..01-08: 7 days, not 4 + 5 = 9.
        assert_eq!(presences[0].absent_days, 7);
        assert_eq!(presences[0].present_days, 3);
    }

    /// PD-006: identical duplicate intervals count once
    #[test]
    fn test_pd_006_duplicate_intervals_count_once() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[
                interval("x", "2024-01-03", "2024-01-04"),
                interval("x", "2024-01-03", "2024-01-04"),
            ],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 2);
        assert_eq!(presences[0].present_days, 8);
    }

    /// PD-007: full-range absence floors presence at zero
    #[test]
    fn test_pd_007_full_absence_floors_at_zero() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2023-12-01", "2024-02-01")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 10);
        assert_eq!(presences[0].present_days, 0);
    }

    /// PD-008: disjoint intervals sum independently
    #[test]
    fn test_pd_008_disjoint_intervals_sum() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[
                interval("x", "2024-01-02", "2024-01-03"),
                interval("x", "2024-01-07", "2024-01-08"),
            ],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 4);
        assert_eq!(presences[0].present_days, 6);
    }

    #[test]
    fn test_adjacent_intervals_sum_without_gap() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[
                interval("x", "2024-01-02", "2024-01-04"),
                interval("x", "2024-01-05", "2024-01-06"),
            ],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].absent_days, 5);
    }

    #[test]
    fn test_absences_only_affect_their_member() {
        let presences = calculate_presence_days(
            &members(&["x", "y"]),
            &[interval("x", "2024-01-03", "2024-01-04")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].member_id, "x");
        assert_eq!(presences[0].present_days, 8);
        assert_eq!(presences[1].member_id, "y");
        assert_eq!(presences[1].present_days, 10);
    }

    #[test]
    fn test_absence_for_unknown_member_ignored() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("stranger", "2024-01-03", "2024-01-04")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert_eq!(presences[0].present_days, 10);
    }

    #[test]
    fn test_results_preserve_member_order() {
        let presences = calculate_presence_days(
            &members(&["c", "a", "b"]),
            &[],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        let ids: Vec<&str> = presences.iter().map(|p| p.member_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_single_day_range() {
        let presences = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2024-01-01", "2024-01-01")],
            make_date("2024-01-01"),
            make_date("2024-01-01"),
        )
        .unwrap();

        assert_eq!(presences[0].total_days, 1);
        assert_eq!(presences[0].present_days, 0);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = calculate_presence_days(
            &members(&["x"]),
            &[],
            make_date("2024-01-10"),
            make_date("2024-01-01"),
        );

        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_reversed_absence_interval_is_rejected() {
        let result = calculate_presence_days(
            &members(&["x"]),
            &[interval("x", "2024-01-04", "2024-01-03")],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        );

        assert!(matches!(
            result,
            Err(EngineError::InvalidAbsenceInterval { .. })
        ));
    }

    #[test]
    fn test_empty_member_list_yields_empty_result() {
        let presences = calculate_presence_days(
            &[],
            &[],
            make_date("2024-01-01"),
            make_date("2024-01-10"),
        )
        .unwrap();

        assert!(presences.is_empty());
    }

    #[test]
    fn test_presence_bounds_hold_across_members() {
        let presences = calculate_presence_days(
            &members(&["a", "b", "c"]),
            &[
                interval("a", "2024-01-01", "2024-01-31"),
                interval("b", "2024-01-05", "2024-01-06"),
                interval("b", "2024-01-06", "2024-01-09"),
            ],
            make_date("2024-01-01"),
            make_date("2024-01-31"),
        )
        .unwrap();

        for presence in &presences {
            assert!(presence.present_days >= 0);
            assert!(presence.present_days <= presence.total_days);
        }
    }
}
