use chrono::{NaiveDate, NaiveTime};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};
use serde::Serialize;

use crate::consts::DISPLAY_DATE_FORMAT;
use crate::core::{Progress, SessionStatus};
use crate::error::AppError;
use crate::state::{Language, Theme};

/// Rendering switches shared by every view
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) theme: Theme,
    pub(crate) language: Language,
}

/// Foreground colors for the active theme; all `None` without color
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Palette {
    pub(super) accent: Option<Color>,
    pub(super) live: Option<Color>,
    pub(super) pending: Option<Color>,
    pub(super) completed: Option<Color>,
    pub(super) muted: Option<Color>,
}

impl Palette {
    pub(super) fn new(options: &ViewOptions) -> Self {
        if !options.use_color {
            return Palette::default();
        }
        match options.theme {
            Theme::Light => Palette {
                accent: Some(Color::DarkBlue),
                live: Some(Color::DarkGreen),
                pending: Some(Color::DarkYellow),
                completed: Some(Color::Grey),
                muted: Some(Color::Grey),
            },
            Theme::Dark | Theme::System => Palette {
                accent: Some(Color::Cyan),
                live: Some(Color::Green),
                pending: Some(Color::Yellow),
                completed: Some(Color::DarkGrey),
                muted: Some(Color::DarkGrey),
            },
        }
    }

    pub(super) fn status(&self, status: SessionStatus) -> Option<Color> {
        match status {
            SessionStatus::Live => self.live,
            SessionStatus::Pending => self.pending,
            SessionStatus::Completed => self.completed,
        }
    }
}

pub(super) fn status_marker(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Live => "●",
        SessionStatus::Pending => "○",
        SessionStatus::Completed => "✓",
    }
}

pub(super) fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub(super) fn format_window(window: Option<(NaiveTime, NaiveTime)>) -> String {
    match window {
        Some((start, end)) => format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
        None => crate::consts::UNKNOWN.to_string(),
    }
}

/// Fixed-width bar such as `[██████░░░░]`
pub(super) fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub(super) fn progress_text(progress: &Progress) -> String {
    format!(
        "{}% ({}/{})",
        progress.percent, progress.completed_periods, progress.total_periods
    )
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, palette: &Palette) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if let Some(c) = palette.accent {
        cell = cell.fg(c);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Bold accent text outside a table
pub(super) fn emphasize(text: &str, palette: &Palette) -> String {
    if palette.accent.is_some() {
        format!("\x1b[1;36m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print a section title the way every view does
pub(super) fn print_title(title: &str) {
    println!("\n  {title}\n");
}
