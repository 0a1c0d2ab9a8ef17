//! Settings and About views

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::{SessionType, Timetable};
use crate::error::AppError;
use crate::output::format::{
    Palette, ViewOptions, create_styled_table, emphasize, header_cell, print_title, to_json,
};
use crate::output::labels::{Labels, type_label};
use crate::state::{AppState, Language, Theme};

#[derive(Debug, Serialize)]
struct SettingsSnapshot {
    theme: Theme,
    language: Language,
    schedule_loaded: bool,
    overrides: BTreeMap<String, SessionType>,
    abbreviations: BTreeMap<String, String>,
}

impl SettingsSnapshot {
    fn build(state: &AppState) -> Self {
        let (overrides, abbreviations) = match state.schedule() {
            Some(s) => (s.overrides.clone(), s.abbreviations.clone()),
            None => (BTreeMap::new(), BTreeMap::new()),
        };
        SettingsSnapshot {
            theme: state.theme(),
            language: state.language(),
            schedule_loaded: state.schedule().is_some(),
            overrides,
            abbreviations,
        }
    }
}

pub(crate) fn print_settings(state: &AppState, options: &ViewOptions) {
    let snapshot = SettingsSnapshot::build(state);
    let labels = Labels::get(options.language);
    let palette = Palette::new(options);

    print_title(labels.settings_title);
    println!("  {}: {}", labels.theme, emphasize(snapshot.theme.as_str(), &palette));
    println!(
        "  {}: {}",
        labels.language,
        emphasize(snapshot.language.as_str(), &palette)
    );

    print_title(labels.overrides);
    if snapshot.overrides.is_empty() {
        println!("  {}", labels.none);
    } else {
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell(labels.code, &palette),
            header_cell(labels.kind, &palette),
        ]);
        for (code, kind) in &snapshot.overrides {
            table.add_row(vec![code.as_str(), type_label(*kind, options.language)]);
        }
        println!("{table}");
    }

    print_title(labels.abbreviations);
    if snapshot.abbreviations.is_empty() {
        println!("  {}", labels.none);
    } else {
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell(labels.course, &palette),
            header_cell("", &palette),
        ]);
        for (name, short) in &snapshot.abbreviations {
            table.add_row(vec![name.as_str(), short.as_str()]);
        }
        println!("{table}");
    }
    println!();
}

pub(crate) fn output_settings_json(state: &AppState) -> Result<String, AppError> {
    to_json(&SettingsSnapshot::build(state))
}

#[derive(Debug, Serialize)]
struct AboutSnapshot {
    version: &'static str,
    data_location: Option<String>,
    timezone: String,
    teacher_name: Option<String>,
    semester: Option<String>,
    academic_year: Option<String>,
    weeks: usize,
    sessions: usize,
    period_starts: Vec<String>,
    theory_minutes: i64,
    practice_minutes: i64,
}

impl AboutSnapshot {
    fn build(state: &AppState, timetable: &Timetable, timezone: &str) -> Self {
        let schedule = state.schedule();
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        AboutSnapshot {
            version: env!("CARGO_PKG_VERSION"),
            data_location: state.store().path().map(|p| p.display().to_string()),
            timezone: timezone.to_string(),
            teacher_name: schedule.and_then(|s| non_empty(&s.metadata.teacher_name)),
            semester: schedule.and_then(|s| non_empty(&s.metadata.semester)),
            academic_year: schedule.and_then(|s| non_empty(&s.metadata.academic_year)),
            weeks: schedule.map_or(0, |s| s.weeks.len()),
            sessions: schedule.map_or(0, |s| s.dated_sessions().len()),
            period_starts: (1..=timetable.period_count() as u32)
                .filter_map(|p| timetable.period_start(p))
                .map(|t| t.format("%H:%M").to_string())
                .collect(),
            theory_minutes: timetable.minutes_per_period(SessionType::Theory),
            practice_minutes: timetable.minutes_per_period(SessionType::Practice),
        }
    }
}

pub(crate) fn print_about(
    state: &AppState,
    timetable: &Timetable,
    timezone: &str,
    options: &ViewOptions,
) {
    let about = AboutSnapshot::build(state, timetable, timezone);
    let labels = Labels::get(options.language);
    let palette = Palette::new(options);
    let unknown = crate::consts::UNKNOWN;

    print_title(&format!(
        "{} · teachdash {}",
        labels.about_title,
        emphasize(about.version, &palette)
    ));
    println!("  {}: {}", labels.version, about.version);
    println!(
        "  {}: {}",
        labels.data_location,
        about.data_location.as_deref().unwrap_or(unknown)
    );
    println!("  TZ: {}", about.timezone);
    println!(
        "  {}: {}",
        labels.teacher,
        about.teacher_name.as_deref().unwrap_or(unknown)
    );
    println!(
        "  {}: {}",
        labels.semester,
        about.semester.as_deref().unwrap_or(unknown)
    );
    println!(
        "  {}: {}",
        labels.academic_year,
        about.academic_year.as_deref().unwrap_or(unknown)
    );
    println!(
        "  {}: {}  {}: {}",
        labels.week, about.weeks, labels.sessions, about.sessions
    );

    if !options.compact {
        let mut table = create_styled_table();
        table.set_header(vec![
            header_cell(labels.slot, &palette),
            header_cell(labels.time, &palette),
        ]);
        for (i, start) in about.period_starts.iter().enumerate() {
            table.add_row(vec![(i + 1).to_string(), start.clone()]);
        }
        println!();
        println!("{table}");
        println!(
            "  {} {} min · {} {} min",
            labels.theory, about.theory_minutes, labels.practice, about.practice_minutes
        );
    }
    println!();
}

pub(crate) fn output_about_json(
    state: &AppState,
    timetable: &Timetable,
    timezone: &str,
) -> Result<String, AppError> {
    to_json(&AboutSnapshot::build(state, timetable, timezone))
}
