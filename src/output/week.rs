//! Week view: weekday × shift grid

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use comfy_table::Cell;
use serde::Serialize;

use crate::core::{DatedSession, Progress, Schedule, Shift, WeekPhase, week_summaries};
use crate::error::AppError;
use crate::output::format::{
    Palette, create_styled_table, format_date, header_cell, print_title, progress_bar,
    progress_text, styled_cell, to_json,
};
use crate::output::labels::{Labels, phase_label, shift_label, weekday_label};
use crate::output::rows::{SessionRow, ViewContext};

#[derive(Debug, Serialize)]
struct WeekDay {
    date: NaiveDate,
    weekday: Weekday,
    sessions: Vec<SessionRow>,
}

#[derive(Debug, Serialize)]
struct WeekSnapshot {
    week_number: u32,
    date_range: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    phase: WeekPhase,
    progress: Progress,
    days: Vec<WeekDay>,
}

impl WeekSnapshot {
    fn build(schedule: &Schedule, index: usize, ctx: &ViewContext<'_>) -> Self {
        let week = &schedule.weeks[index];
        let range = week.range();
        let summary = week_summaries(schedule, ctx.teacher, ctx.now, ctx.timetable)
            .into_iter()
            .nth(index);

        // Seven consecutive dates from the first day, even those without teaching
        let days = match range {
            Some(range) => (0..7)
                .map(|offset| {
                    let date = range.start + Duration::days(offset);
                    let sessions: Vec<DatedSession<'_>> = week
                        .day_on(date)
                        .map(|day| {
                            day.sessions()
                                .map(|(shift, session)| DatedSession {
                                    week_index: index,
                                    date,
                                    shift,
                                    session,
                                })
                                .collect()
                        })
                        .unwrap_or_default();
                    WeekDay {
                        date,
                        weekday: date.weekday(),
                        sessions: SessionRow::from_all(schedule, &sessions, ctx),
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        WeekSnapshot {
            week_number: week.week_number,
            date_range: week.date_range.clone(),
            start: range.map(|r| r.start),
            end: range.map(|r| r.end),
            phase: summary.as_ref().map_or(WeekPhase::Unknown, |s| s.phase),
            progress: summary.map(|s| s.progress).unwrap_or_default(),
            days,
        }
    }
}

pub(crate) fn print_week(schedule: &Schedule, index: usize, ctx: &ViewContext<'_>) {
    let snapshot = WeekSnapshot::build(schedule, index, ctx);
    let labels = Labels::get(ctx.options.language);
    let palette = Palette::new(&ctx.options);
    let language = ctx.options.language;

    let dates = match (snapshot.start, snapshot.end) {
        (Some(start), Some(end)) => format!("{} → {}", format_date(start), format_date(end)),
        _ => snapshot.date_range.clone(),
    };
    print_title(&format!(
        "{} {} · {} · {}",
        labels.week,
        snapshot.week_number,
        dates,
        phase_label(snapshot.phase, language)
    ));

    if snapshot.days.is_empty() {
        println!("  {}: \"{}\"", labels.date, snapshot.date_range);
        return;
    }

    let mut table = create_styled_table();
    let mut header = vec![header_cell("", &palette)];
    for day in &snapshot.days {
        header.push(header_cell(
            &format!(
                "{}\n{}",
                weekday_label(day.weekday, language),
                day.date.format("%d/%m")
            ),
            &palette,
        ));
    }
    table.set_header(header);

    for shift in Shift::ALL {
        let mut row = vec![styled_cell(shift_label(shift, language), None, true)];
        for day in &snapshot.days {
            let texts: Vec<String> = day
                .sessions
                .iter()
                .filter(|s| s.shift == shift)
                .map(|s| s.short_text(ctx.options.compact))
                .collect();
            // a cell takes the color of its first session
            let color = day
                .sessions
                .iter()
                .find(|s| s.shift == shift)
                .and_then(|s| palette.status(s.status));
            row.push(match color {
                Some(c) => Cell::new(texts.join("\n")).fg(c),
                None => Cell::new(texts.join("\n")),
            });
        }
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "\n  {} {} {}\n",
        labels.progress,
        progress_bar(snapshot.progress.percent, 20),
        progress_text(&snapshot.progress)
    );
}

pub(crate) fn output_week_json(
    schedule: &Schedule,
    index: usize,
    ctx: &ViewContext<'_>,
) -> Result<String, AppError> {
    to_json(&WeekSnapshot::build(schedule, index, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SessionStatus, Timetable};
    use crate::output::format::ViewOptions;
    use crate::output::rows::fixtures;
    use crate::state::{Language, Theme};
    use crate::utils::parse_datetime;

    fn ctx(timetable: &Timetable) -> ViewContext<'_> {
        ViewContext {
            now: parse_datetime("2024-04-03 09:50").unwrap(),
            timetable,
            teacher: "",
            options: ViewOptions {
                use_color: false,
                compact: true,
                theme: Theme::Dark,
                language: Language::En,
            },
        }
    }

    #[test]
    fn grid_covers_seven_days() {
        let schedule = fixtures::schedule();
        let timetable = Timetable::default();
        let snapshot = WeekSnapshot::build(&schedule, 0, &ctx(&timetable));
        assert_eq!(snapshot.days.len(), 7);
        assert_eq!(snapshot.days[0].weekday, Weekday::Mon);
        assert_eq!(snapshot.days[0].sessions[0].status, SessionStatus::Completed);
        assert_eq!(snapshot.days[2].sessions.len(), 2);
        assert!(snapshot.days[1].sessions.is_empty());
        assert_eq!(snapshot.phase, WeekPhase::Current);
        assert_eq!(snapshot.progress.total_periods, 8);
    }

    #[test]
    fn upcoming_week_is_all_pending() {
        let schedule = fixtures::schedule();
        let timetable = Timetable::default();
        let snapshot = WeekSnapshot::build(&schedule, 1, &ctx(&timetable));
        assert_eq!(snapshot.phase, WeekPhase::Upcoming);
        let statuses: Vec<SessionStatus> = snapshot
            .days
            .iter()
            .flat_map(|d| d.sessions.iter().map(|s| s.status))
            .collect();
        assert_eq!(statuses, vec![SessionStatus::Pending]);
    }

    #[test]
    fn json_lists_days() {
        let schedule = fixtures::schedule();
        let timetable = Timetable::default();
        let json = output_week_json(&schedule, 0, &ctx(&timetable)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["week_number"], 1);
        assert_eq!(value["phase"], "current");
        assert_eq!(value["days"][2]["weekday"], "Wed");
        assert_eq!(value["start"], "2024-04-01");
    }
}
