//! Today view: what is happening now and how far along the semester is

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::{
    DisplayState, ProgressReport, Schedule, compute_progress, current_week_index,
    days_until_semester_start, find_next_teaching, select_display_state,
};
use crate::error::AppError;
use crate::output::format::{
    Palette, emphasize, format_date, print_title, progress_bar, progress_text, to_json,
};
use crate::output::labels::{Labels, state_label, weekday_label};
use crate::output::rows::{SessionRow, ViewContext, session_table};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
pub(super) struct NextDay {
    pub(super) date: NaiveDate,
    pub(super) week_number: u32,
    pub(super) sessions: Vec<SessionRow>,
}

impl NextDay {
    pub(super) fn find(schedule: &Schedule, ctx: &ViewContext<'_>) -> Option<Self> {
        let next = find_next_teaching(schedule, ctx.now, ctx.timetable)?;
        Some(NextDay {
            date: next.date,
            week_number: schedule.weeks[next.week_index].week_number,
            sessions: SessionRow::from_all(schedule, &next.sessions, ctx),
        })
    }
}

#[derive(Debug, Serialize)]
pub(super) struct TodaySnapshot {
    pub(super) date: NaiveDate,
    pub(super) now: String,
    pub(super) state: DisplayState,
    pub(super) week_number: Option<u32>,
    pub(super) sessions: Vec<SessionRow>,
    pub(super) progress: Option<ProgressReport>,
    pub(super) next: Option<NextDay>,
    pub(super) days_until_start: Option<i64>,
    pub(super) semester_start: Option<NaiveDate>,
}

impl TodaySnapshot {
    pub(super) fn build(schedule: Option<&Schedule>, ctx: &ViewContext<'_>) -> Self {
        let today = ctx.now.date();
        let state = select_display_state(schedule, ctx.now);
        let mut snapshot = TodaySnapshot {
            date: today,
            now: ctx.now.format("%Y-%m-%d %H:%M").to_string(),
            state,
            week_number: None,
            sessions: Vec::new(),
            progress: None,
            next: None,
            days_until_start: None,
            semester_start: None,
        };
        let Some(schedule) = schedule else {
            return snapshot;
        };
        if state == DisplayState::NoData {
            return snapshot;
        }

        snapshot.week_number =
            current_week_index(schedule, ctx.now).map(|i| schedule.weeks[i].week_number);
        snapshot.progress = Some(compute_progress(
            schedule,
            ctx.teacher,
            ctx.now,
            ctx.timetable,
        ));
        match state {
            DisplayState::HasSessions => {
                snapshot.sessions =
                    SessionRow::from_all(schedule, &schedule.sessions_on(today), ctx);
            }
            DisplayState::NoSessions => {
                snapshot.next = NextDay::find(schedule, ctx);
            }
            DisplayState::BeforeSemester => {
                snapshot.days_until_start = days_until_semester_start(schedule, ctx.now);
                snapshot.semester_start = schedule.first_start();
                snapshot.next = NextDay::find(schedule, ctx);
            }
            DisplayState::AfterSemester | DisplayState::NoData => {}
        }
        snapshot
    }
}

pub(super) fn print_progress(progress: &ProgressReport, ctx: &ViewContext<'_>) {
    let labels = Labels::get(ctx.options.language);
    let rows = [
        (labels.today, &progress.today),
        (labels.week, &progress.week),
        (labels.month, &progress.month),
        (labels.semester, &progress.semester),
    ];
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, p) in rows {
        let padding = " ".repeat(label_width - label.chars().count());
        println!(
            "  {label}{padding}  {} {}",
            progress_bar(p.percent, BAR_WIDTH),
            progress_text(p)
        );
    }
}

fn day_heading(date: NaiveDate, ctx: &ViewContext<'_>) -> String {
    format!(
        "{}, {}",
        weekday_label(date.weekday(), ctx.options.language),
        format_date(date)
    )
}

pub(super) fn print_next_day(next: &NextDay, ctx: &ViewContext<'_>) {
    let labels = Labels::get(ctx.options.language);
    print_title(&format!(
        "{}: {} ({} {})",
        labels.next,
        day_heading(next.date, ctx),
        labels.week,
        next.week_number
    ));
    println!("{}", session_table(&next.sessions, &ctx.options));
}

pub(crate) fn print_today(schedule: Option<&Schedule>, ctx: &ViewContext<'_>) {
    let snapshot = TodaySnapshot::build(schedule, ctx);
    let labels = Labels::get(ctx.options.language);
    let palette = Palette::new(&ctx.options);

    let mut title = format!("{} · {}", labels.today, day_heading(snapshot.date, ctx));
    if let Some(number) = snapshot.week_number {
        title.push_str(&format!(" · {} {}", labels.week, number));
    }
    print_title(&title);
    println!(
        "  {}",
        emphasize(state_label(snapshot.state, ctx.options.language), &palette)
    );

    match snapshot.state {
        DisplayState::NoData => {
            println!("  {}", labels.no_data);
            println!("  {}", labels.no_data_hint);
            return;
        }
        DisplayState::BeforeSemester => {
            if let (Some(days), Some(start)) = (snapshot.days_until_start, snapshot.semester_start)
            {
                println!("  {}", labels.starts_in(days, &format_date(start)));
            }
        }
        DisplayState::AfterSemester => println!("  {}", labels.after_semester),
        DisplayState::NoSessions => println!("  {}", labels.no_sessions_today),
        DisplayState::HasSessions => {
            println!();
            println!("{}", session_table(&snapshot.sessions, &ctx.options));
        }
    }

    if let Some(next) = &snapshot.next {
        print_next_day(next, ctx);
    } else if snapshot.state == DisplayState::NoSessions {
        println!("  {}", labels.no_more_teaching);
    }

    if let Some(progress) = &snapshot.progress {
        print_title(labels.progress);
        print_progress(progress, ctx);
        println!();
    }
}

pub(crate) fn output_today_json(
    schedule: Option<&Schedule>,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    to_json(&TodaySnapshot::build(schedule, ctx))
}

/// The next day with teaching left, on its own
pub(crate) fn print_next(schedule: &Schedule, ctx: &ViewContext<'_>) {
    match NextDay::find(schedule, ctx) {
        Some(next) => {
            print_next_day(&next, ctx);
            println!();
        }
        None => println!("{}", Labels::get(ctx.options.language).no_more_teaching),
    }
}

pub(crate) fn output_next_json(
    schedule: &Schedule,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    to_json(&NextDay::find(schedule, ctx))
}
