//! Progress estimation and staffing heuristics for scheduled studies.
//!
//! The planner answers two questions about a study's collection window:
//! is it on schedule, and how many interviewers does it take to land on
//! time? Both are pure functions of a [`ScheduledStudy`] snapshot and an
//! in-memory roster; nothing here touches the network or mutates state.
//!
//! The health classification compares actual completion against a linear
//! expected-completion curve over the collection window, with a ±10 point
//! tolerance band:
//!
//! ```text
//! expected = 100 − (days_remaining / total_days) × 100
//!
//! progress ≥ expected + 10   → on track
//! progress ≥ expected − 10   → at risk
//! otherwise                  → delayed
//! ```
//!
//! Past the end date the curve no longer applies: the study is on track
//! only if it is fully complete. Degenerate windows (start == end, or an
//! inverted range) take the same immediately-due branch, which keeps the
//! division well-defined.

use jiff::civil::Date;

use crate::models::{HealthStatus, Interviewer, ScheduledStudy};

/// Tolerance band around the expected-completion curve, in percent points.
const PROGRESS_TOLERANCE: f64 = 10.0;

/// Whole days from `from` to `to`, negative when `to` is in the past.
fn days_between(from: Date, to: Date) -> i32 {
    (to - from).get_days()
}

/// Expected completion percentage for a collection window as of `today`.
///
/// Linear interpolation from 0% on the start date to 100% on the end
/// date. Outside the window the value saturates at 0 and 100, and a
/// zero-length window reads as 100% expected.
pub fn expected_progress(start: Date, end: Date, today: Date) -> f64 {
    let total_days = days_between(start, end);
    if total_days <= 0 || days_between(today, end) <= 0 {
        return 100.0;
    }
    let days_remaining = days_between(today, end);
    if days_remaining >= total_days {
        return 0.0;
    }
    100.0 - (f64::from(days_remaining) / f64::from(total_days)) * 100.0
}

/// Classify a scheduled study's health as of `today`.
///
/// Always returns one of the three statuses; the band boundaries are
/// inclusive, so a study sitting exactly on the expected curve is at
/// risk, not delayed.
pub fn classify_status(study: &ScheduledStudy, today: Date) -> HealthStatus {
    let progress = study.progress();
    let days_remaining = days_between(today, study.end);
    let total_days = days_between(study.start, study.end);

    if days_remaining <= 0 || total_days <= 0 {
        return if progress >= 100.0 {
            HealthStatus::OnTrack
        } else {
            HealthStatus::Delayed
        };
    }

    let expected = 100.0 - (f64::from(days_remaining) / f64::from(total_days)) * 100.0;

    if progress >= expected + PROGRESS_TOLERANCE {
        HealthStatus::OnTrack
    } else if progress >= expected - PROGRESS_TOLERANCE {
        HealthStatus::AtRisk
    } else {
        HealthStatus::Delayed
    }
}

/// Estimate how many interviewers the study needs to hit its quota
/// target within its collection window.
///
/// Capacity planning, not a constraint solver: the roster's mean
/// productivity stands in for every interviewer, and availability
/// day-sets are ignored. An empty roster (or one with no positive
/// productivity) yields 0 — no roster data means no estimate, never a
/// division fault. Degenerate windows are floored to one day.
pub fn required_interviewers(study: &ScheduledStudy, roster: &[Interviewer]) -> u32 {
    if roster.is_empty() {
        return 0;
    }

    let avg_productivity =
        roster.iter().map(|worker| worker.productivity).sum::<f64>() / roster.len() as f64;
    if avg_productivity <= 0.0 {
        return 0;
    }

    let days = days_between(study.start, study.end).max(1);
    (f64::from(study.quota_target) / (f64::from(days) * avg_productivity)).ceil() as u32
}

/// One row of the schedule board: a study snapshot with its derived
/// health status and staffing estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// The scheduled study
    pub study: ScheduledStudy,
    /// Health classification as of the board date
    pub status: HealthStatus,
    /// Interviewers needed to finish on time
    pub required_interviewers: u32,
}

/// The full scheduling view: every study classified and sized, plus the
/// aggregate counters shown at the top of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleBoard {
    /// Per-study rows, in the order the studies were supplied
    pub entries: Vec<ScheduleEntry>,
    /// Number of interviewers in the roster
    pub roster_size: usize,
    /// Studies whose end date is still ahead of the board date
    pub running: usize,
    /// Studies classified at risk
    pub at_risk: usize,
    /// Studies classified delayed
    pub delayed: usize,
    /// Date the board was computed for
    pub as_of: Date,
}

impl ScheduleBoard {
    /// Build a board from study snapshots and a worker roster as of
    /// `today`.
    pub fn build(studies: Vec<ScheduledStudy>, roster: &[Interviewer], today: Date) -> Self {
        let entries: Vec<ScheduleEntry> = studies
            .into_iter()
            .map(|study| {
                let status = classify_status(&study, today);
                let required = required_interviewers(&study, roster);
                ScheduleEntry {
                    study,
                    status,
                    required_interviewers: required,
                }
            })
            .collect();

        let running = entries
            .iter()
            .filter(|entry| entry.study.end > today)
            .count();
        let at_risk = entries
            .iter()
            .filter(|entry| entry.status == HealthStatus::AtRisk)
            .count();
        let delayed = entries
            .iter()
            .filter(|entry| entry.status == HealthStatus::Delayed)
            .count();

        Self {
            entries,
            roster_size: roster.len(),
            running,
            at_risk,
            delayed,
            as_of: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn study(start: Date, end: Date, target: u32, completed: u32) -> ScheduledStudy {
        ScheduledStudy {
            id: 1,
            name: "Étude de marché".to_string(),
            start,
            end,
            quota_target: target,
            quota_completed: completed,
            dependency: None,
            supervisor: None,
            client: None,
        }
    }

    fn worker(id: u64, productivity: f64) -> Interviewer {
        Interviewer {
            id,
            name: format!("Interviewer {id}"),
            availability: vec!["lundi".to_string(), "mardi".to_string()],
            productivity,
        }
    }

    #[test]
    fn test_past_due_complete_is_on_track() {
        let study = study(date(2023, 9, 1), date(2023, 9, 30), 100, 100);
        let status = classify_status(&study, date(2023, 10, 15));
        assert_eq!(status, HealthStatus::OnTrack);
    }

    #[test]
    fn test_past_due_incomplete_is_delayed() {
        let study = study(date(2023, 9, 1), date(2023, 9, 30), 100, 50);
        let status = classify_status(&study, date(2023, 10, 15));
        assert_eq!(status, HealthStatus::Delayed);
    }

    #[test]
    fn test_exactly_on_schedule_is_at_risk() {
        // Halfway through a 20-day window with half the quota collected:
        // progress equals the expected curve, inside the inclusive band.
        let study = study(date(2023, 10, 1), date(2023, 10, 21), 1000, 500);
        let today = date(2023, 10, 11);
        assert_eq!(expected_progress(study.start, study.end, today), 50.0);
        assert_eq!(classify_status(&study, today), HealthStatus::AtRisk);
    }

    #[test]
    fn test_ahead_of_curve_is_on_track() {
        // 60% done when only 50% is expected: exactly on the +10 boundary.
        let study = study(date(2023, 10, 1), date(2023, 10, 21), 1000, 600);
        assert_eq!(
            classify_status(&study, date(2023, 10, 11)),
            HealthStatus::OnTrack
        );
    }

    #[test]
    fn test_behind_curve_is_delayed() {
        // 30% done when 50% is expected: below the −10 boundary.
        let study = study(date(2023, 10, 1), date(2023, 10, 21), 1000, 300);
        assert_eq!(
            classify_status(&study, date(2023, 10, 11)),
            HealthStatus::Delayed
        );
    }

    #[test]
    fn test_zero_length_window_uses_due_branch() {
        let done = study(date(2023, 10, 1), date(2023, 10, 1), 100, 100);
        let unfinished = study(date(2023, 10, 1), date(2023, 10, 1), 100, 99);

        assert_eq!(classify_status(&done, date(2023, 10, 1)), HealthStatus::OnTrack);
        assert_eq!(
            classify_status(&unfinished, date(2023, 10, 1)),
            HealthStatus::Delayed
        );
    }

    #[test]
    fn test_required_interviewers_capacity_estimate() {
        // 1000 interviews over a 10-day window at 10/day each: 10 people.
        let study = study(date(2023, 10, 1), date(2023, 10, 11), 1000, 0);
        let roster: Vec<Interviewer> = (1..=4).map(|id| worker(id, 10.0)).collect();
        assert_eq!(required_interviewers(&study, &roster), 10);
    }

    #[test]
    fn test_required_interviewers_rounds_up() {
        // 1001 interviews cannot be covered by 10 people.
        let study = study(date(2023, 10, 1), date(2023, 10, 11), 1001, 0);
        let roster = vec![worker(1, 10.0)];
        assert_eq!(required_interviewers(&study, &roster), 11);
    }

    #[test]
    fn test_required_interviewers_empty_roster_is_guarded() {
        let study = study(date(2023, 10, 1), date(2023, 10, 11), 1000, 0);
        assert_eq!(required_interviewers(&study, &[]), 0);
    }

    #[test]
    fn test_required_interviewers_zero_productivity_is_guarded() {
        let study = study(date(2023, 10, 1), date(2023, 10, 11), 1000, 0);
        let roster = vec![worker(1, 0.0), worker(2, 0.0)];
        assert_eq!(required_interviewers(&study, &roster), 0);
    }

    #[test]
    fn test_required_interviewers_zero_length_window() {
        // A same-day study is floored to a one-day window.
        let study = study(date(2023, 10, 1), date(2023, 10, 1), 40, 0);
        let roster = vec![worker(1, 8.0)];
        assert_eq!(required_interviewers(&study, &roster), 5);
    }

    #[test]
    fn test_estimator_is_idempotent() {
        let study = study(date(2023, 10, 1), date(2023, 10, 21), 1000, 450);
        let roster = vec![worker(1, 8.0), worker(2, 10.0)];
        let today = date(2023, 10, 12);

        assert_eq!(
            classify_status(&study, today),
            classify_status(&study, today)
        );
        assert_eq!(
            required_interviewers(&study, &roster),
            required_interviewers(&study, &roster)
        );
    }

    #[test]
    fn test_expected_progress_saturates() {
        let start = date(2023, 10, 1);
        let end = date(2023, 10, 21);

        assert_eq!(expected_progress(start, end, date(2023, 9, 1)), 0.0);
        assert_eq!(expected_progress(start, end, date(2023, 11, 1)), 100.0);
        assert_eq!(expected_progress(start, start, date(2023, 10, 1)), 100.0);
    }

    #[test]
    fn test_board_aggregates() {
        let today = date(2023, 10, 20);
        let studies = vec![
            // Running and comfortably ahead.
            study(date(2023, 10, 1), date(2023, 11, 15), 1000, 750),
            // Running but behind the curve.
            study(date(2023, 10, 1), date(2023, 11, 1), 2000, 400),
            // Ended yesterday, unfinished.
            study(date(2023, 9, 1), date(2023, 10, 19), 500, 300),
        ];
        let roster = vec![worker(1, 8.0), worker(2, 9.0)];

        let board = ScheduleBoard::build(studies, &roster, today);

        assert_eq!(board.entries.len(), 3);
        assert_eq!(board.roster_size, 2);
        assert_eq!(board.running, 2);
        assert_eq!(board.delayed, 2);
        assert_eq!(board.entries[0].status, HealthStatus::OnTrack);
        assert_eq!(board.entries[1].status, HealthStatus::Delayed);
        assert_eq!(board.entries[2].status, HealthStatus::Delayed);
    }
}
