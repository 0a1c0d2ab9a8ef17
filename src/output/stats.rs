//! Statistics view

use chrono::Weekday;
use comfy_table::Cell;
use serde::Serialize;

use crate::core::{
    Conflict, CourseSummary, ProgressReport, Schedule, compute_progress, course_summaries,
    detect_conflicts, flagged_conflicts, weekday_distribution,
};
use crate::error::AppError;
use crate::output::format::{
    Palette, create_styled_table, format_date, header_cell, print_title, right_cell,
    styled_cell, to_json,
};
use crate::output::labels::{Labels, weekday_label};
use crate::output::rows::ViewContext;
use crate::output::today::print_progress;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Serialize)]
struct StatsSnapshot {
    progress: ProgressReport,
    courses: Vec<CourseSummary>,
    weekday_periods: [u32; 7],
    conflicts: Vec<Conflict>,
    flagged_conflicts: usize,
}

impl StatsSnapshot {
    fn build(schedule: &Schedule, ctx: &ViewContext<'_>) -> Self {
        StatsSnapshot {
            progress: compute_progress(schedule, ctx.teacher, ctx.now, ctx.timetable),
            courses: course_summaries(schedule, ctx.teacher, ctx.now, ctx.timetable),
            weekday_periods: weekday_distribution(schedule, ctx.teacher),
            conflicts: detect_conflicts(schedule, ctx.teacher),
            flagged_conflicts: flagged_conflicts(schedule),
        }
    }
}

pub(crate) fn print_stats(schedule: &Schedule, ctx: &ViewContext<'_>) {
    let snapshot = StatsSnapshot::build(schedule, ctx);
    let labels = Labels::get(ctx.options.language);
    let palette = Palette::new(&ctx.options);

    print_title(labels.stats_title);
    print_progress(&snapshot.progress, ctx);

    let mut courses = create_styled_table();
    if ctx.options.compact {
        courses.set_header(vec![
            header_cell(labels.course, &palette),
            header_cell(labels.periods, &palette),
            header_cell(labels.completed_periods, &palette),
        ]);
    } else {
        courses.set_header(vec![
            header_cell(labels.code, &palette),
            header_cell(labels.course, &palette),
            header_cell(labels.sessions, &palette),
            header_cell(labels.theory, &palette),
            header_cell(labels.practice, &palette),
            header_cell(labels.periods, &palette),
            header_cell(labels.completed_periods, &palette),
        ]);
    }
    let mut total = CourseSummary::default();
    for course in &snapshot.courses {
        total.sessions = total.sessions.saturating_add(course.sessions);
        total.theory_periods = total.theory_periods.saturating_add(course.theory_periods);
        total.practice_periods = total.practice_periods.saturating_add(course.practice_periods);
        total.total_periods = total.total_periods.saturating_add(course.total_periods);
        total.completed_periods = total
            .completed_periods
            .saturating_add(course.completed_periods);
        if ctx.options.compact {
            courses.add_row(vec![
                Cell::new(&course.display_name),
                right_cell(&course.total_periods.to_string(), None, false),
                right_cell(&course.completed_periods.to_string(), palette.live, false),
            ]);
        } else {
            courses.add_row(vec![
                Cell::new(&course.course_code),
                Cell::new(&course.display_name),
                right_cell(&course.sessions.to_string(), None, false),
                right_cell(&course.theory_periods.to_string(), None, false),
                right_cell(&course.practice_periods.to_string(), None, false),
                right_cell(&course.total_periods.to_string(), None, false),
                right_cell(&course.completed_periods.to_string(), palette.live, false),
            ]);
        }
    }
    if ctx.options.compact {
        courses.add_row(vec![
            styled_cell(labels.semester, palette.accent, true),
            right_cell(&total.total_periods.to_string(), None, true),
            right_cell(&total.completed_periods.to_string(), None, true),
        ]);
    } else {
        courses.add_row(vec![
            styled_cell(labels.semester, palette.accent, true),
            Cell::new(""),
            right_cell(&total.sessions.to_string(), None, true),
            right_cell(&total.theory_periods.to_string(), None, true),
            right_cell(&total.practice_periods.to_string(), None, true),
            right_cell(&total.total_periods.to_string(), None, true),
            right_cell(&total.completed_periods.to_string(), None, true),
        ]);
    }
    print_title(labels.course);
    println!("{courses}");

    let mut weekdays = create_styled_table();
    weekdays.set_header(
        WEEKDAYS
            .iter()
            .map(|w| header_cell(weekday_label(*w, ctx.options.language), &palette))
            .collect::<Vec<_>>(),
    );
    weekdays.add_row(
        snapshot
            .weekday_periods
            .iter()
            .map(|p| right_cell(&p.to_string(), None, false))
            .collect::<Vec<_>>(),
    );
    print_title(labels.weekday);
    println!("{weekdays}");

    print_title(labels.conflicts);
    if snapshot.conflicts.is_empty() {
        println!("  {}", labels.none);
    }
    for conflict in &snapshot.conflicts {
        println!(
            "  {} ({} {}): {} [{}] × {} [{}]",
            format_date(conflict.date),
            labels.week,
            conflict.week_number,
            conflict.first,
            conflict.first_slot,
            conflict.second,
            conflict.second_slot
        );
    }
    if snapshot.flagged_conflicts > 0 {
        println!("  {}: {}", labels.flagged_conflicts, snapshot.flagged_conflicts);
    }
    println!();
}

pub(crate) fn output_stats_json(
    schedule: &Schedule,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    to_json(&StatsSnapshot::build(schedule, ctx))
}
