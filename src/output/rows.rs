//! Session rows shared by the today, week and next views

use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table};
use serde::Serialize;

use crate::consts::UNKNOWN;
use crate::core::{
    DatedSession, Schedule, SessionStatus, SessionType, Shift, Timetable, classify_dated,
};
use crate::output::format::{
    Palette, ViewOptions, create_styled_table, format_window, header_cell, right_cell,
    status_marker, styled_cell,
};
use crate::output::labels::{Labels, shift_label, status_label, type_label};

/// Everything a view needs besides the schedule itself
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewContext<'a> {
    pub(crate) now: NaiveDateTime,
    pub(crate) timetable: &'a Timetable,
    /// Primary teacher; empty matches every session
    pub(crate) teacher: &'a str,
    pub(crate) options: ViewOptions,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct SessionRow {
    pub(super) date: NaiveDate,
    pub(super) shift: Shift,
    pub(super) course_code: String,
    pub(super) course: String,
    pub(super) teacher: String,
    pub(super) room: String,
    pub(super) class_name: String,
    pub(super) group: String,
    pub(super) time_slot: String,
    pub(super) time: String,
    pub(super) session_type: SessionType,
    pub(super) periods: u32,
    pub(super) status: SessionStatus,
    pub(super) has_conflict: bool,
}

fn or_unknown(text: &str) -> String {
    if text.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        text.to_string()
    }
}

impl SessionRow {
    pub(super) fn new(schedule: &Schedule, dated: &DatedSession<'_>, ctx: &ViewContext<'_>) -> Self {
        let session = dated.session;
        let session_type = schedule.effective_type(session);
        let window = session
            .period_range()
            .and_then(|range| ctx.timetable.session_window(range, session_type));
        SessionRow {
            date: dated.date,
            shift: dated.shift,
            course_code: session.course_code.clone(),
            course: schedule.display_name(session).to_string(),
            teacher: or_unknown(&session.teacher),
            room: or_unknown(&session.room),
            class_name: or_unknown(&session.class_name),
            group: session.group.clone(),
            time_slot: session.time_slot.clone(),
            time: format_window(window),
            session_type,
            periods: session.periods(),
            status: classify_dated(schedule, dated, ctx.now, ctx.timetable),
            has_conflict: session.has_conflict,
        }
    }

    pub(super) fn from_all(
        schedule: &Schedule,
        sessions: &[DatedSession<'_>],
        ctx: &ViewContext<'_>,
    ) -> Vec<Self> {
        sessions
            .iter()
            .map(|dated| SessionRow::new(schedule, dated, ctx))
            .collect()
    }

    fn class_text(&self) -> String {
        if self.group.trim().is_empty() {
            self.class_name.clone()
        } else {
            format!("{} ({})", self.class_name, self.group)
        }
    }

    /// One-line summary used inside grid cells
    pub(super) fn short_text(&self, compact: bool) -> String {
        let marker = status_marker(self.status);
        if compact {
            format!("{marker} {}", self.course)
        } else {
            format!("{marker} {} [{}]\n{} {}", self.course, self.time_slot, self.room, self.time)
        }
    }
}

/// Table of sessions in time order
pub(super) fn session_table(rows: &[SessionRow], options: &ViewOptions) -> Table {
    let labels = Labels::get(options.language);
    let palette = Palette::new(options);
    let mut table = create_styled_table();

    if options.compact {
        table.set_header(vec![
            header_cell(labels.time, &palette),
            header_cell(labels.course, &palette),
            header_cell(labels.room, &palette),
            header_cell(labels.status, &palette),
        ]);
    } else {
        table.set_header(vec![
            header_cell(labels.time, &palette),
            header_cell(labels.slot, &palette),
            header_cell(labels.code, &palette),
            header_cell(labels.course, &palette),
            header_cell(labels.room, &palette),
            header_cell(labels.class, &palette),
            header_cell(labels.kind, &palette),
            header_cell(labels.periods, &palette),
            header_cell(labels.status, &palette),
        ]);
    }

    for row in rows {
        let status_color = palette.status(row.status);
        let live = row.status == SessionStatus::Live;
        let status = format!(
            "{} {}",
            status_marker(row.status),
            status_label(row.status, options.language)
        );
        let time = format!("{} {}", shift_label(row.shift, options.language), row.time);
        let course = if row.has_conflict {
            format!("{} (!)", row.course)
        } else {
            row.course.clone()
        };
        if options.compact {
            table.add_row(vec![
                Cell::new(&row.time),
                styled_cell(&course, None, live),
                Cell::new(&row.room),
                styled_cell(&status, status_color, live),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(&time),
                Cell::new(&row.time_slot),
                Cell::new(&row.course_code),
                styled_cell(&course, None, live),
                Cell::new(&row.room),
                Cell::new(row.class_text()),
                Cell::new(type_label(row.session_type, options.language)),
                right_cell(&row.periods.to_string(), None, false),
                styled_cell(&status, status_color, live),
            ]);
        }
    }
    table
}

#[cfg(test)]
pub(super) mod fixtures {
    //! Shared schedule for view tests

    use crate::core::Schedule;
    use crate::source::parse_schedule;

    pub(crate) const SCHEDULE_JSON: &str = r#"{
        "metadata": {"teacherName": "ThS. Nguyễn Văn An", "semester": "HK2", "academicYear": "2023-2024"},
        "weeks": [
            {
                "weekNumber": 1,
                "dateRange": "01/04/2024 → 07/04/2024",
                "days": {
                    "monday": {
                        "morning": [{"courseCode": "IT001", "courseName": "Lập trình", "teacher": "Nguyễn Văn An",
                                     "room": "A1.101", "className": "CNTT1", "timeSlot": "1-3", "type": "theory"}]
                    },
                    "wednesday": {
                        "morning": [{"courseCode": "IT001", "courseName": "Lập trình", "teacher": "Nguyễn Văn An",
                                     "room": "A1.101", "className": "CNTT1", "timeSlot": "1-3", "type": "theory"}],
                        "afternoon": [{"courseCode": "IT002", "courseName": "Mạng máy tính", "teacher": "Nguyễn Văn An",
                                       "room": "B2.204", "className": "CNTT2", "timeSlot": "6-7", "type": "practice"}]
                    }
                }
            },
            {
                "weekNumber": 2,
                "dateRange": "08/04/2024 → 14/04/2024",
                "days": {
                    "thursday": {
                        "evening": [{"courseCode": "IT002", "courseName": "Mạng máy tính", "teacher": "Nguyễn Văn An",
                                     "room": "B2.204", "className": "CNTT2", "timeSlot": "11-12", "type": "practice"}]
                    }
                }
            }
        ]
    }"#;

    pub(crate) fn schedule() -> Schedule {
        parse_schedule(SCHEDULE_JSON).unwrap()
    }
}
