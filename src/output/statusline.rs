use chrono::Datelike;
use serde_json::json;

use crate::core::{
    DisplayState, Schedule, SessionStatus, compute_progress, select_display_state,
};
use crate::error::AppError;
use crate::output::format::format_date;
use crate::output::labels::{Labels, state_label, weekday_label};
use crate::output::rows::{SessionRow, ViewContext};
use crate::output::today::NextDay;

/// First session of the next teaching day that is not over yet
fn next_session(schedule: &Schedule, ctx: &ViewContext<'_>) -> Option<SessionRow> {
    let next = NextDay::find(schedule, ctx)?;
    next.sessions
        .into_iter()
        .find(|s| s.status != SessionStatus::Completed)
}

/// Output a single line suitable for statusline/tmux integration
/// Format: "<state> | Today 40% | Week 55% | Next: Thứ 5 11/04/2024 18:00 IT002"
pub(crate) fn format_statusline(schedule: Option<&Schedule>, ctx: &ViewContext<'_>) -> String {
    let language = ctx.options.language;
    let labels = Labels::get(language);
    let state = select_display_state(schedule, ctx.now);
    let mut parts = vec![state_label(state, language).to_string()];

    if let Some(schedule) = schedule
        && state != DisplayState::NoData
    {
        let progress = compute_progress(schedule, ctx.teacher, ctx.now, ctx.timetable);
        parts.push(format!("{} {}%", labels.today, progress.today.percent));
        parts.push(format!("{} {}%", labels.week, progress.week.percent));
        if let Some(session) = next_session(schedule, ctx) {
            let start = session.time.split('-').next().unwrap_or_default().to_string();
            let marker = if session.status == SessionStatus::Live {
                "● "
            } else {
                ""
            };
            parts.push(format!(
                "{}: {} {} {} {}{}",
                labels.next,
                weekday_label(session.date.weekday(), language),
                format_date(session.date),
                start,
                marker,
                session.course
            ));
        }
    }
    parts.join(" | ")
}

pub(crate) fn print_statusline(schedule: Option<&Schedule>, ctx: &ViewContext<'_>) {
    println!("{}", format_statusline(schedule, ctx));
}

/// Output statusline as JSON for programmatic consumption
pub(crate) fn output_statusline_json(
    schedule: Option<&Schedule>,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    let state = select_display_state(schedule, ctx.now);
    let (progress, next) = match schedule {
        Some(schedule) if state != DisplayState::NoData => (
            Some(compute_progress(schedule, ctx.teacher, ctx.now, ctx.timetable)),
            next_session(schedule, ctx),
        ),
        _ => (None, None),
    };
    let output = json!({
        "state": state,
        "today_percent": progress.map(|p| p.today.percent),
        "week_percent": progress.map(|p| p.week.percent),
        "semester_percent": progress.map(|p| p.semester.percent),
        "next": next,
        "formatted": format_statusline(schedule, ctx),
    });
    Ok(serde_json::to_string(&output)?)
}
