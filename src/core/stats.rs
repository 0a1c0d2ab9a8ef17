//! Semester statistics: per-course totals, weekday load and conflicts

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

use crate::core::classify::{SessionStatus, classify_dated};
use crate::core::names::TeacherFilter;
use crate::core::timetable::Timetable;
use crate::core::types::{DatedSession, Schedule, SessionType};

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct CourseSummary {
    pub(crate) course_code: String,
    pub(crate) display_name: String,
    pub(crate) sessions: u32,
    pub(crate) total_periods: u32,
    pub(crate) theory_periods: u32,
    pub(crate) practice_periods: u32,
    pub(crate) completed_periods: u32,
}

/// Totals per course, largest course first
pub(crate) fn course_summaries(
    schedule: &Schedule,
    teacher: &str,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> Vec<CourseSummary> {
    let mut courses: HashMap<String, CourseSummary> = HashMap::new();

    let filter = TeacherFilter::new(teacher);
    for dated in schedule.dated_sessions() {
        let session = dated.session;
        if !filter.matches(&session.teacher) {
            continue;
        }
        let periods = session.periods();
        let course = courses
            .entry(session.course_code.clone())
            .or_insert_with(|| CourseSummary {
                course_code: session.course_code.clone(),
                display_name: schedule.display_name(session).to_string(),
                ..Default::default()
            });
        course.sessions = course.sessions.saturating_add(1);
        course.total_periods = course.total_periods.saturating_add(periods);
        let by_type = match schedule.effective_type(session) {
            SessionType::Theory => &mut course.theory_periods,
            SessionType::Practice => &mut course.practice_periods,
        };
        *by_type = by_type.saturating_add(periods);
        if classify_dated(schedule, &dated, now, timetable) == SessionStatus::Completed {
            course.completed_periods = course.completed_periods.saturating_add(periods);
        }
    }

    let mut result: Vec<CourseSummary> = courses.into_values().collect();
    result.sort_by(|a, b| {
        b.total_periods
            .cmp(&a.total_periods)
            .then_with(|| a.course_code.cmp(&b.course_code))
    });
    result
}

/// Periods taught per weekday, Monday first
pub(crate) fn weekday_distribution(schedule: &Schedule, teacher: &str) -> [u32; 7] {
    let mut distribution = [0u32; 7];
    let filter = TeacherFilter::new(teacher);
    for dated in schedule.dated_sessions() {
        if filter.matches(&dated.session.teacher) {
            let slot = &mut distribution[dated.date.weekday().num_days_from_monday() as usize];
            *slot = slot.saturating_add(dated.session.periods());
        }
    }
    distribution
}

/// Two sessions of the same day whose period ranges overlap
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Conflict {
    pub(crate) date: NaiveDate,
    pub(crate) week_number: u32,
    pub(crate) first: String,
    pub(crate) second: String,
    pub(crate) first_slot: String,
    pub(crate) second_slot: String,
}

/// Overlapping sessions of the primary teacher, in date order
pub(crate) fn detect_conflicts(schedule: &Schedule, teacher: &str) -> Vec<Conflict> {
    let mut by_date: Vec<(NaiveDate, Vec<DatedSession<'_>>)> = Vec::new();
    let filter = TeacherFilter::new(teacher);
    for dated in schedule.dated_sessions() {
        if !filter.matches(&dated.session.teacher) {
            continue;
        }
        match by_date.iter_mut().find(|(d, _)| *d == dated.date) {
            Some((_, sessions)) => sessions.push(dated),
            None => by_date.push((dated.date, vec![dated])),
        }
    }
    by_date.sort_by_key(|(d, _)| *d);

    let mut conflicts = Vec::new();
    for (date, sessions) in &by_date {
        for (i, a) in sessions.iter().enumerate() {
            let Some(range_a) = a.session.period_range() else {
                continue;
            };
            for b in &sessions[i + 1..] {
                let Some(range_b) = b.session.period_range() else {
                    continue;
                };
                if range_a.overlaps(range_b) {
                    conflicts.push(Conflict {
                        date: *date,
                        week_number: schedule.weeks[a.week_index].week_number,
                        first: a.session.course_code.clone(),
                        second: b.session.course_code.clone(),
                        first_slot: a.session.time_slot.clone(),
                        second_slot: b.session.time_slot.clone(),
                    });
                }
            }
        }
    }
    conflicts
}

/// Sessions the source document itself marked as conflicting
pub(crate) fn flagged_conflicts(schedule: &Schedule) -> usize {
    schedule
        .dated_sessions()
        .iter()
        .filter(|ds| ds.session.has_conflict)
        .count()
}
