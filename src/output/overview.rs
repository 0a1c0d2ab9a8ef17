//! Overview: one row per week of the semester

use comfy_table::Cell;
use serde::Serialize;

use crate::core::{Progress, Schedule, WeekPhase, WeekSummary, week_summaries};
use crate::error::AppError;
use crate::output::format::{
    Palette, create_styled_table, format_date, header_cell, print_title, progress_bar,
    progress_text, right_cell, styled_cell, to_json,
};
use crate::output::labels::{Labels, phase_label};
use crate::output::rows::ViewContext;

#[derive(Debug, Serialize)]
struct WeekRow {
    week_number: u32,
    date_range: String,
    phase: WeekPhase,
    sessions: usize,
    progress: Progress,
}

fn week_rows(schedule: &Schedule, ctx: &ViewContext<'_>) -> Vec<WeekRow> {
    week_summaries(schedule, ctx.teacher, ctx.now, ctx.timetable)
        .into_iter()
        .map(|summary: WeekSummary| WeekRow {
            week_number: summary.week_number,
            date_range: match summary.range {
                Some(range) => format!("{} → {}", format_date(range.start), format_date(range.end)),
                None => schedule.weeks[summary.index].date_range.clone(),
            },
            phase: summary.phase,
            sessions: summary.sessions,
            progress: summary.progress,
        })
        .collect()
}

pub(crate) fn print_overview(schedule: &Schedule, ctx: &ViewContext<'_>) {
    let labels = Labels::get(ctx.options.language);
    let palette = Palette::new(&ctx.options);
    let rows = week_rows(schedule, ctx);

    let mut table = create_styled_table();
    let mut header = vec![
        header_cell(labels.week, &palette),
        header_cell(labels.date, &palette),
        header_cell(labels.status, &palette),
        header_cell(labels.sessions, &palette),
        header_cell(labels.periods, &palette),
    ];
    if !ctx.options.compact {
        header.push(header_cell(labels.progress, &palette));
    }
    table.set_header(header);

    let mut total = (0u32, 0u32);
    let mut total_sessions = 0usize;
    for row in &rows {
        let current = row.phase == WeekPhase::Current;
        let phase_color = match row.phase {
            WeekPhase::Current => palette.live,
            WeekPhase::Past => palette.muted,
            WeekPhase::Upcoming | WeekPhase::Unknown => None,
        };
        total.0 = total.0.saturating_add(row.progress.completed_periods);
        total.1 = total.1.saturating_add(row.progress.total_periods);
        total_sessions = total_sessions.saturating_add(row.sessions);

        let mut cells = vec![
            styled_cell(&row.week_number.to_string(), None, current),
            Cell::new(&row.date_range),
            styled_cell(phase_label(row.phase, ctx.options.language), phase_color, current),
            right_cell(&row.sessions.to_string(), None, false),
            right_cell(
                &format!(
                    "{}/{}",
                    row.progress.completed_periods, row.progress.total_periods
                ),
                None,
                false,
            ),
        ];
        if !ctx.options.compact {
            cells.push(Cell::new(format!(
                "{} {}%",
                progress_bar(row.progress.percent, 10),
                row.progress.percent
            )));
        }
        table.add_row(cells);
    }

    let semester = Progress::from_counts(total.0, total.1);
    let mut total_row = vec![
        styled_cell(labels.semester, palette.accent, true),
        Cell::new(""),
        Cell::new(""),
        right_cell(&total_sessions.to_string(), None, true),
        right_cell(&format!("{}/{}", total.0, total.1), None, true),
    ];
    if !ctx.options.compact {
        total_row.push(styled_cell(&progress_text(&semester), palette.accent, true));
    }
    table.add_row(total_row);

    print_title(labels.overview_title);
    println!("{table}\n");
}

pub(crate) fn output_overview_json(
    schedule: &Schedule,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    to_json(&week_rows(schedule, ctx))
}
