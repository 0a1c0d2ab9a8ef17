//! Temporal classification
//!
//! Maps an evaluation instant onto weeks (current / past) and sessions
//! (live / pending / completed). Everything here is pure: nothing is stored,
//! and malformed dates are treated as "no match" rather than errors.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::core::timetable::Timetable;
use crate::core::types::{DatedSession, Schedule, Session, SessionType, Week};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SessionStatus {
    Live,
    Pending,
    Completed,
}

/// `now` lies in `[start, start + 7 days)`
pub(crate) fn is_current_week(week: &Week, now: NaiveDateTime) -> bool {
    let Some(range) = week.range() else {
        return false;
    };
    let start = range.start.and_time(NaiveTime::MIN);
    now >= start && now < start + Duration::days(7)
}

/// The week ended before today (time of day ignored)
pub(crate) fn is_past_week(week: &Week, now: NaiveDateTime) -> bool {
    week.range().is_some_and(|range| range.end < now.date())
}

/// Classify one session taking place on `date`.
///
/// Live is inclusive at both ends of the session window. Without a usable
/// period range only the date is compared.
pub(crate) fn classify_session(
    session: &Session,
    session_type: SessionType,
    date: NaiveDate,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> SessionStatus {
    let today = now.date();
    if date < today {
        return SessionStatus::Completed;
    }
    if date > today {
        return SessionStatus::Pending;
    }

    let window = session
        .period_range()
        .and_then(|range| timetable.session_window(range, session_type));
    let Some((start, end)) = window else {
        return SessionStatus::Pending;
    };

    let time = now.time();
    if end < time {
        SessionStatus::Completed
    } else if start <= time {
        SessionStatus::Live
    } else {
        SessionStatus::Pending
    }
}

/// Classify a dated session with the schedule's type overrides applied
pub(crate) fn classify_dated(
    schedule: &Schedule,
    dated: &DatedSession<'_>,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> SessionStatus {
    classify_session(
        dated.session,
        schedule.effective_type(dated.session),
        dated.date,
        now,
        timetable,
    )
}

/// First upcoming day that still has teaching left
#[derive(Debug, Clone)]
pub(crate) struct NextTeaching<'a> {
    pub(crate) date: NaiveDate,
    pub(crate) week_index: usize,
    pub(crate) sessions: Vec<DatedSession<'a>>,
}

/// Scan forward from today for the first day holding at least one session
/// that is not yet completed. `None` once the semester is over.
pub(crate) fn find_next_teaching<'a>(
    schedule: &'a Schedule,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> Option<NextTeaching<'a>> {
    let today = now.date();
    for (week_index, week) in schedule.weeks.iter().enumerate() {
        for (date, day) in week.dated_days() {
            if date < today {
                continue;
            }
            let sessions: Vec<DatedSession<'a>> = day
                .sessions()
                .map(|(shift, session)| DatedSession {
                    week_index,
                    date,
                    shift,
                    session,
                })
                .collect();
            let has_remaining = sessions.iter().any(|ds| {
                classify_dated(schedule, ds, now, timetable) != SessionStatus::Completed
            });
            if has_remaining {
                return Some(NextTeaching {
                    date,
                    week_index,
                    sessions,
                });
            }
        }
    }
    None
}

/// Whole days (rounded up) until the first week starts, if it has not yet
pub(crate) fn days_until_semester_start(schedule: &Schedule, now: NaiveDateTime) -> Option<i64> {
    let start = schedule.first_start()?.and_time(NaiveTime::MIN);
    if now >= start {
        return None;
    }
    let seconds = (start - now).num_seconds();
    Some((seconds + 86_399) / 86_400)
}

/// Index of the week that contains `now`
pub(crate) fn current_week_index(schedule: &Schedule, now: NaiveDateTime) -> Option<usize> {
    schedule.weeks.iter().position(|w| is_current_week(w, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Day;
    use crate::utils::parse_datetime;

    fn at(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        at(s).date()
    }

    fn week(number: u32, range: &str) -> Week {
        Week {
            week_number: number,
            date_range: range.to_string(),
            ..Default::default()
        }
    }

    fn session(slot: &str) -> Session {
        Session {
            course_code: "IT001".to_string(),
            time_slot: slot.to_string(),
            ..Default::default()
        }
    }

    fn schedule_with(days: &[(&str, &str, &[&str])]) -> Schedule {
        // (range, weekday, slots)
        let mut schedule = Schedule::default();
        for (i, (range, weekday, slots)) in days.iter().enumerate() {
            let mut w = week(i as u32 + 1, range);
            let day = Day {
                morning: slots.iter().map(|s| session(s)).collect(),
                ..Default::default()
            };
            w.days.insert(weekday.to_string(), day);
            schedule.weeks.push(w);
        }
        schedule
    }

    #[test]
    fn current_week_example() {
        let w = week(1, "01/04/2024 → 07/04/2024");
        assert!(is_current_week(&w, at("2024-04-03 10:00")));
        assert!(!is_past_week(&w, at("2024-04-03 10:00")));
    }

    #[test]
    fn past_week_example() {
        let w = week(1, "01/04/2024 → 07/04/2024");
        assert!(is_past_week(&w, at("2024-04-08")));
        assert!(!is_current_week(&w, at("2024-04-08")));
    }

    #[test]
    fn current_week_boundaries() {
        let w = week(1, "01/04/2024 → 07/04/2024");
        assert!(is_current_week(&w, at("2024-04-01 00:00")));
        assert!(is_current_week(&w, at("2024-04-07 23:59")));
        assert!(!is_current_week(&w, at("2024-04-08 00:00")));
        assert!(!is_current_week(&w, at("2024-03-31 23:59")));
    }

    #[test]
    fn last_day_of_week_is_not_past() {
        let w = week(1, "01/04/2024 → 07/04/2024");
        assert!(!is_past_week(&w, at("2024-04-07 23:59")));
    }

    #[test]
    fn current_and_past_are_exclusive_for_well_formed_weeks() {
        let w = week(1, "01/04/2024 → 07/04/2024");
        let mut t = at("2024-03-25 00:00");
        while t < at("2024-04-15 00:00") {
            assert!(!(is_current_week(&w, t) && is_past_week(&w, t)), "at {t}");
            t += Duration::hours(5);
        }
    }

    #[test]
    fn malformed_range_never_matches() {
        let w = week(1, "sometime in April");
        assert!(!is_current_week(&w, at("2024-04-03 10:00")));
        assert!(!is_past_week(&w, at("2030-01-01")));
    }

    #[test]
    fn live_during_theory_session() {
        let table = Timetable::default();
        let s = session("1-3");
        let today = date("2024-04-03");
        // period 3 starts 09:45, + 45 minutes => live until 10:30
        let status = classify_session(&s, SessionType::Theory, today, at("2024-04-03 09:50"), &table);
        assert_eq!(status, SessionStatus::Live);
    }

    #[test]
    fn live_window_is_inclusive() {
        let table = Timetable::default();
        let s = session("1-3");
        let today = date("2024-04-03");
        let classify = |t: &str| classify_session(&s, SessionType::Theory, today, at(t), &table);
        assert_eq!(classify("2024-04-03 07:59"), SessionStatus::Pending);
        assert_eq!(classify("2024-04-03 08:00"), SessionStatus::Live);
        assert_eq!(classify("2024-04-03 10:30"), SessionStatus::Live);
        assert_eq!(classify("2024-04-03 10:31"), SessionStatus::Completed);
    }

    #[test]
    fn practice_runs_longer_than_theory() {
        let table = Timetable::default();
        let s = session("1-3");
        let today = date("2024-04-03");
        let now = at("2024-04-03 10:40");
        assert_eq!(
            classify_session(&s, SessionType::Theory, today, now, &table),
            SessionStatus::Completed
        );
        assert_eq!(
            classify_session(&s, SessionType::Practice, today, now, &table),
            SessionStatus::Live
        );
    }

    #[test]
    fn past_date_is_completed_regardless_of_time() {
        let table = Timetable::default();
        let s = session("11-14");
        for t in ["2024-04-04 00:00", "2024-04-04 07:00", "2024-04-04 23:59"] {
            assert_eq!(
                classify_session(&s, SessionType::Theory, date("2024-04-03"), at(t), &table),
                SessionStatus::Completed
            );
        }
    }

    #[test]
    fn future_date_is_pending() {
        let table = Timetable::default();
        let s = session("1-2");
        assert_eq!(
            classify_session(&s, SessionType::Theory, date("2024-04-05"), at("2024-04-03 23:00"), &table),
            SessionStatus::Pending
        );
    }

    #[test]
    fn unknown_slot_today_falls_back_to_pending() {
        let table = Timetable::default();
        let s = session("??");
        assert_eq!(
            classify_session(&s, SessionType::Theory, date("2024-04-03"), at("2024-04-03 23:00"), &table),
            SessionStatus::Pending
        );
        assert_eq!(
            classify_session(&s, SessionType::Theory, date("2024-04-02"), at("2024-04-03 01:00"), &table),
            SessionStatus::Completed
        );
    }

    #[test]
    fn overrides_change_session_end() {
        let table = Timetable::default();
        let mut schedule = schedule_with(&[("01/04/2024 → 07/04/2024", "wednesday", &["1-3"])]);
        let dated = schedule.dated_sessions()[0];
        let now = at("2024-04-03 10:40");
        assert_eq!(
            classify_dated(&schedule, &dated, now, &table),
            SessionStatus::Completed
        );

        schedule
            .overrides
            .insert("IT001".to_string(), SessionType::Practice);
        let dated = schedule.dated_sessions()[0];
        assert_eq!(classify_dated(&schedule, &dated, now, &table), SessionStatus::Live);
    }

    #[test]
    fn next_teaching_skips_finished_days() {
        let table = Timetable::default();
        let schedule = schedule_with(&[
            ("01/04/2024 → 07/04/2024", "wednesday", &["1-3"]),
            ("08/04/2024 → 14/04/2024", "monday", &["6-8"]),
        ]);
        // morning session on Wed is over, so the next day is Monday of week 2
        let next = find_next_teaching(&schedule, at("2024-04-03 11:00"), &table).unwrap();
        assert_eq!(next.date, date("2024-04-08"));
        assert_eq!(next.week_index, 1);
        assert_eq!(next.sessions.len(), 1);
    }

    #[test]
    fn next_teaching_includes_live_today() {
        let table = Timetable::default();
        let schedule = schedule_with(&[("01/04/2024 → 07/04/2024", "wednesday", &["1-3"])]);
        let next = find_next_teaching(&schedule, at("2024-04-03 09:00"), &table).unwrap();
        assert_eq!(next.date, date("2024-04-03"));
    }

    #[test]
    fn next_teaching_none_when_everything_completed() {
        let table = Timetable::default();
        let schedule = schedule_with(&[
            ("01/04/2024 → 07/04/2024", "wednesday", &["1-3"]),
            ("08/04/2024 → 14/04/2024", "monday", &["6-8"]),
        ]);
        assert!(find_next_teaching(&schedule, at("2024-04-08 23:00"), &table).is_none());
        for ds in schedule.dated_sessions() {
            assert_eq!(
                classify_dated(&schedule, &ds, at("2024-04-08 23:00"), &table),
                SessionStatus::Completed
            );
        }
    }

    #[test]
    fn next_teaching_on_empty_schedule() {
        let table = Timetable::default();
        assert!(find_next_teaching(&Schedule::default(), at("2024-04-03 09:00"), &table).is_none());
    }

    #[test]
    fn days_until_start_rounds_up() {
        let schedule = schedule_with(&[("01/04/2024 → 07/04/2024", "monday", &["1-3"])]);
        assert_eq!(days_until_semester_start(&schedule, at("2024-03-30 10:00")), Some(2));
        assert_eq!(days_until_semester_start(&schedule, at("2024-03-31 00:00")), Some(1));
        assert_eq!(days_until_semester_start(&schedule, at("2024-04-01 00:00")), None);
        assert_eq!(days_until_semester_start(&schedule, at("2024-04-05 00:00")), None);
    }

    #[test]
    fn days_until_start_without_weeks() {
        assert_eq!(
            days_until_semester_start(&Schedule::default(), at("2024-03-30 10:00")),
            None
        );
    }

    #[test]
    fn current_week_index_lookup() {
        let schedule = schedule_with(&[
            ("01/04/2024 → 07/04/2024", "monday", &[]),
            ("08/04/2024 → 14/04/2024", "monday", &[]),
        ]);
        assert_eq!(current_week_index(&schedule, at("2024-04-09 12:00")), Some(1));
        assert_eq!(current_week_index(&schedule, at("2024-05-01 12:00")), None);
    }
}
