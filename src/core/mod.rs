//! Core module - schedule model and the time-based logic every view shares

mod classify;
mod clock;
mod display;
mod names;
mod progress;
mod stats;
mod summary;
mod timetable;
mod types;

pub(crate) use classify::{
    SessionStatus, classify_dated, current_week_index, days_until_semester_start,
    find_next_teaching,
};
pub(crate) use clock::{Clock, FixedClock, SystemClock};
pub(crate) use display::{DisplayState, select_display_state};
pub(crate) use progress::{Progress, ProgressReport, compute_progress};
pub(crate) use stats::{
    Conflict, CourseSummary, course_summaries, detect_conflicts, flagged_conflicts,
    weekday_distribution,
};
pub(crate) use summary::{WeekPhase, WeekSummary, resolve_week_index, week_summaries};
pub(crate) use timetable::Timetable;
pub(crate) use types::{DatedSession, Schedule, SessionType, Shift};
