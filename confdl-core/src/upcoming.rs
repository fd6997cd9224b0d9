//! Upcoming-deadline selection and ranking.

use chrono::{Datelike, NaiveDateTime};

use crate::clock::Clock;
use crate::conference::Conference;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `now` until `deadline`, rounded toward negative infinity.
pub fn days_left(deadline: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (deadline - now).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Keep events that are not past and fall no later than next calendar year,
/// then rank the surviving conferences by their nearest deadline.
///
/// `now` is reference-timezone wall-clock time. Conferences left without
/// events are dropped. Ties keep input order.
pub fn select_upcoming(conferences: Vec<Conference>, now: NaiveDateTime) -> Vec<Conference> {
    let horizon_year = now.year() + 1;

    let mut upcoming: Vec<Conference> = conferences
        .into_iter()
        .filter_map(|mut conf| {
            conf.timelines.retain_mut(|event| {
                let days = days_left(event.deadline_reference, now);
                if days >= 0 && event.deadline_reference.year() <= horizon_year {
                    event.days_left = Some(days);
                    true
                } else {
                    false
                }
            });

            if conf.timelines.is_empty() {
                return None;
            }

            conf.timelines.sort_by_key(|event| event.deadline_reference);
            conf.min_days_left = conf.timelines.iter().filter_map(|e| e.days_left).min();
            Some(conf)
        })
        .collect();

    upcoming.sort_by_key(|conf| conf.min_days_left);
    upcoming
}

/// [`select_upcoming`] against an injected clock.
pub fn select_upcoming_with<C: Clock>(conferences: Vec<Conference>, clock: &C) -> Vec<Conference> {
    select_upcoming(conferences, clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::conference::{DeadlineKind, TimelineEvent};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn event(reference: &str) -> TimelineEvent {
        TimelineEvent {
            kind: DeadlineKind::PaperSubmission,
            deadline: ts(reference),
            deadline_reference: ts(reference),
            comment: String::new(),
            days_left: None,
        }
    }

    fn conf(name: &str, deadlines: &[&str]) -> Conference {
        Conference {
            name: name.to_string(),
            full_name: String::new(),
            category: "AI/Vision".to_string(),
            ccf_rank: "A".to_string(),
            year: "2026".to_string(),
            place: "TBA".to_string(),
            date: "TBA".to_string(),
            timezone: "UTC+9".to_string(),
            link: String::new(),
            timelines: deadlines.iter().map(|d| event(d)).collect(),
            min_days_left: None,
            source: "ccfddl".to_string(),
        }
    }

    #[test]
    fn test_days_left_truncates_down() {
        let now = ts("2026-01-01 00:00:00");
        assert_eq!(days_left(ts("2026-01-16 16:59:59"), now), 15);
        assert_eq!(days_left(ts("2026-01-01 23:59:59"), now), 0);
        assert_eq!(days_left(ts("2026-01-02 00:00:00"), now), 1);
        assert_eq!(days_left(ts("2025-12-31 23:00:00"), now), -1);
    }

    #[test]
    fn test_past_events_removed_and_events_sorted() {
        let now = ts("2026-03-01 00:00:00");
        let out = select_upcoming(
            vec![conf(
                "ICML",
                &["2026-05-01 00:00:00", "2026-02-01 00:00:00", "2026-03-10 12:00:00"],
            )],
            now,
        );

        assert_eq!(out.len(), 1);
        let deadlines: Vec<NaiveDateTime> =
            out[0].timelines.iter().map(|t| t.deadline_reference).collect();
        assert_eq!(deadlines, vec![ts("2026-03-10 12:00:00"), ts("2026-05-01 00:00:00")]);
        assert_eq!(out[0].timelines[0].days_left, Some(9));
        assert_eq!(out[0].min_days_left, Some(9));
    }

    #[test]
    fn test_conference_without_upcoming_events_dropped() {
        let now = ts("2026-03-01 00:00:00");
        let out = select_upcoming(
            vec![conf("OLD", &["2025-12-01 00:00:00"]), conf("NEW", &["2026-04-01 00:00:00"])],
            now,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "NEW");
    }

    #[test]
    fn test_horizon_excludes_year_after_next() {
        let now = ts("2026-03-01 00:00:00");
        let out = select_upcoming(
            vec![
                conf("FAR", &["2028-01-10 00:00:00"]),
                conf("NEXT", &["2027-12-31 23:59:59"]),
            ],
            now,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "NEXT");
    }

    #[test]
    fn test_ranked_by_min_days_left_with_stable_ties() {
        let now = ts("2026-01-01 00:00:00");
        let out = select_upcoming(
            vec![
                conf("C", &["2026-06-01 00:00:00"]),
                conf("A", &["2026-02-01 08:00:00"]),
                conf("B", &["2026-02-01 20:00:00", "2026-09-01 00:00:00"]),
            ],
            now,
        );

        let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        for c in &out {
            let min = c.timelines.iter().filter_map(|t| t.days_left).min();
            assert_eq!(c.min_days_left, min);
            assert!(c.timelines.iter().all(|t| t.days_left.unwrap() >= 0));
        }
        assert!(out.windows(2).all(|w| w[0].min_days_left <= w[1].min_days_left));
    }

    #[test]
    fn test_selection_is_idempotent_for_frozen_clock() {
        let clock = FixedClock(ts("2026-01-01 00:00:00"));
        let input = vec![
            conf("X", &["2026-04-01 00:00:00", "2026-01-20 00:00:00"]),
            conf("Y", &["2026-01-05 00:00:00"]),
        ];
        let first = select_upcoming_with(input.clone(), &clock);
        let second = select_upcoming_with(input, &clock);
        assert_eq!(first, second);
    }
}
