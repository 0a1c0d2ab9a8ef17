//! Coarse state of the Today view

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::types::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DisplayState {
    NoData,
    BeforeSemester,
    AfterSemester,
    HasSessions,
    NoSessions,
}

/// Precedence: no data, before semester, after semester, then whether today
/// has any session.
pub(crate) fn select_display_state(schedule: Option<&Schedule>, now: NaiveDateTime) -> DisplayState {
    let Some(schedule) = schedule.filter(|s| !s.weeks.is_empty()) else {
        return DisplayState::NoData;
    };
    let today = now.date();
    if schedule.first_start().is_some_and(|start| today < start) {
        return DisplayState::BeforeSemester;
    }
    if schedule.last_end().is_some_and(|end| today > end) {
        return DisplayState::AfterSemester;
    }
    if schedule.sessions_on(today).is_empty() {
        DisplayState::NoSessions
    } else {
        DisplayState::HasSessions
    }
}
