//! Per-week summaries for the overview and week views

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::classify::{
    SessionStatus, classify_dated, current_week_index, is_current_week, is_past_week,
};
use crate::core::names::TeacherFilter;
use crate::core::progress::Progress;
use crate::core::timetable::Timetable;
use crate::core::types::{DateRange, Schedule};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WeekPhase {
    Past,
    Current,
    Upcoming,
    /// Date range could not be read
    Unknown,
}

#[derive(Debug, Clone)]
pub(crate) struct WeekSummary {
    pub(crate) index: usize,
    pub(crate) week_number: u32,
    pub(crate) range: Option<DateRange>,
    pub(crate) phase: WeekPhase,
    pub(crate) sessions: usize,
    pub(crate) progress: Progress,
}

pub(crate) fn week_summaries(
    schedule: &Schedule,
    teacher: &str,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> Vec<WeekSummary> {
    let mut summaries: Vec<WeekSummary> = schedule
        .weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let range = week.range();
            let phase = if range.is_none() {
                WeekPhase::Unknown
            } else if is_current_week(week, now) {
                WeekPhase::Current
            } else if is_past_week(week, now) {
                WeekPhase::Past
            } else {
                WeekPhase::Upcoming
            };
            WeekSummary {
                index,
                week_number: week.week_number,
                range,
                phase,
                sessions: 0,
                progress: Progress::default(),
            }
        })
        .collect();

    let mut counts = vec![(0u32, 0u32); summaries.len()];
    let filter = TeacherFilter::new(teacher);
    for dated in schedule.dated_sessions() {
        if !filter.matches(&dated.session.teacher) {
            continue;
        }
        let periods = dated.session.periods();
        let (completed, total) = &mut counts[dated.week_index];
        *total = total.saturating_add(periods);
        if classify_dated(schedule, &dated, now, timetable) == SessionStatus::Completed {
            *completed = completed.saturating_add(periods);
        }
        let summary = &mut summaries[dated.week_index];
        summary.sessions = summary.sessions.saturating_add(1);
    }
    for (summary, (completed, total)) in summaries.iter_mut().zip(counts) {
        summary.progress = Progress::from_counts(completed, total);
    }
    summaries
}

/// Pick the week to show: the requested week number, else the current week,
/// else the next week to come, else the last week.
pub(crate) fn resolve_week_index(
    schedule: &Schedule,
    now: NaiveDateTime,
    requested: Option<u32>,
) -> Result<usize, AppError> {
    if schedule.weeks.is_empty() {
        return Err(AppError::NoSchedule);
    }
    if let Some(number) = requested {
        return schedule
            .week_index_by_number(number)
            .ok_or(AppError::InvalidWeek { number });
    }
    if let Some(index) = current_week_index(schedule, now) {
        return Ok(index);
    }
    let today = now.date();
    let upcoming = schedule
        .weeks
        .iter()
        .position(|w| w.range().is_some_and(|r| r.start > today));
    Ok(upcoming.unwrap_or(schedule.weeks.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Day, Session, Week};
    use crate::utils::parse_datetime;

    fn at(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    fn sample() -> Schedule {
        let ranges = [
            "01/04/2024 → 07/04/2024",
            "08/04/2024 → 14/04/2024",
            "unknown",
            "22/04/2024 → 28/04/2024",
        ];
        let weeks = ranges
            .iter()
            .enumerate()
            .map(|(i, range)| {
                let mut week = Week {
                    week_number: i as u32 + 1,
                    date_range: range.to_string(),
                    ..Default::default()
                };
                week.days.insert(
                    "monday".to_string(),
                    Day {
                        morning: vec![Session {
                            time_slot: "1-3".to_string(),
                            period_count: 3,
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                );
                week
            })
            .collect();
        Schedule {
            weeks,
            ..Default::default()
        }
    }

    #[test]
    fn phases_and_progress() {
        let summaries = week_summaries(&sample(), "", at("2024-04-10 12:00"), &Timetable::default());
        let phases: Vec<_> = summaries.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                WeekPhase::Past,
                WeekPhase::Current,
                WeekPhase::Unknown,
                WeekPhase::Upcoming
            ]
        );
        assert_eq!(summaries[0].progress, Progress::from_counts(3, 3));
        assert_eq!(summaries[1].progress, Progress::from_counts(3, 3));
        assert_eq!(summaries[1].sessions, 1);
        // week with an unreadable range has no dated sessions
        assert_eq!(summaries[2].sessions, 0);
        assert_eq!(summaries[3].progress, Progress::from_counts(0, 3));
    }

    #[test]
    fn resolve_requested_week() {
        let s = sample();
        assert_eq!(resolve_week_index(&s, at("2024-04-10 12:00"), Some(4)).unwrap(), 3);
        assert!(matches!(
            resolve_week_index(&s, at("2024-04-10 12:00"), Some(9)),
            Err(AppError::InvalidWeek { number: 9 })
        ));
    }

    #[test]
    fn resolve_default_week() {
        let s = sample();
        assert_eq!(resolve_week_index(&s, at("2024-04-10 12:00"), None).unwrap(), 1);
        // between weeks 2 and 4: the next upcoming one
        assert_eq!(resolve_week_index(&s, at("2024-04-17 12:00"), None).unwrap(), 3);
        // after the semester: the last week
        assert_eq!(resolve_week_index(&s, at("2024-06-01 12:00"), None).unwrap(), 3);
        // before the semester: the first week
        assert_eq!(resolve_week_index(&s, at("2024-03-01 12:00"), None).unwrap(), 0);
    }

    #[test]
    fn resolve_on_empty_schedule() {
        assert!(matches!(
            resolve_week_index(&Schedule::default(), at("2024-04-10 12:00"), None),
            Err(AppError::NoSchedule)
        ));
    }
}
