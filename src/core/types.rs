//! Schedule data model
//!
//! A semester is an ordered list of weeks; each week maps weekday names to
//! days; each day holds three shift buckets of sessions. The serde shape
//! matches the uploaded JSON document (camelCase keys).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::utils::{fold_diacritics, parse_schedule_date, parse_weekday};

/// Kind of teaching, which decides how long a period lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SessionType {
    #[default]
    Theory,
    Practice,
}

impl SessionType {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let folded = fold_diacritics(&raw.trim().to_lowercase());
        match folded.as_str() {
            "theory" | "lt" | "ly thuyet" => Some(SessionType::Theory),
            "practice" | "th" | "thuc hanh" => Some(SessionType::Practice),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SessionType::Theory => "theory",
            SessionType::Practice => "practice",
        }
    }
}

impl<'de> Deserialize<'de> for SessionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SessionType::parse(&raw).unwrap_or_default())
    }
}

/// Shift bucket within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub(crate) const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let folded = fold_diacritics(&raw.trim().to_lowercase());
        match folded.as_str() {
            "morning" | "sang" => Some(Shift::Morning),
            "afternoon" | "chieu" => Some(Shift::Afternoon),
            "evening" | "toi" => Some(Shift::Evening),
            _ => None,
        }
    }
}

fn lenient_shift<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Shift>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Shift::parse))
}

/// Inclusive range of timetable periods, e.g. "1-3"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PeriodRange {
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl PeriodRange {
    /// Parse "1-3", "1 – 3" or a single period "4". A reversed range is
    /// swapped so that `start <= end` always holds.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (a, b) = match trimmed.split_once(['-', '–', '→']) {
            Some((a, b)) => (a, b),
            None => (trimmed, trimmed),
        };
        let a: u32 = a.trim().parse().ok()?;
        let b: u32 = b.trim().parse().ok()?;
        if a == 0 || b == 0 {
            return None;
        }
        Some(PeriodRange {
            start: a.min(b),
            end: a.max(b),
        })
    }

    pub(crate) fn len(self) -> u32 {
        self.end - self.start + 1
    }

    pub(crate) fn overlaps(self, other: PeriodRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// One scheduled teaching occurrence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Session {
    pub(crate) course_code: String,
    pub(crate) course_name: String,
    pub(crate) teacher: String,
    pub(crate) room: String,
    pub(crate) class_name: String,
    pub(crate) group: String,
    pub(crate) time_slot: String,
    #[serde(rename = "type")]
    pub(crate) session_type: SessionType,
    pub(crate) period_count: u32,
    #[serde(deserialize_with = "lenient_shift")]
    pub(crate) session_time: Option<Shift>,
    pub(crate) has_conflict: bool,
}

impl Session {
    pub(crate) fn period_range(&self) -> Option<PeriodRange> {
        PeriodRange::parse(&self.time_slot)
    }

    /// Periods this session is worth; falls back to the width of its range
    pub(crate) fn periods(&self) -> u32 {
        if self.period_count > 0 {
            return self.period_count;
        }
        self.period_range().map_or(0, PeriodRange::len)
    }
}

/// Sessions of one day, split into shift buckets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Day {
    pub(crate) morning: Vec<Session>,
    pub(crate) afternoon: Vec<Session>,
    pub(crate) evening: Vec<Session>,
}

impl Day {
    pub(crate) fn bucket(&self, shift: Shift) -> &[Session] {
        match shift {
            Shift::Morning => &self.morning,
            Shift::Afternoon => &self.afternoon,
            Shift::Evening => &self.evening,
        }
    }

    /// Sessions in shift order, morning first
    pub(crate) fn sessions(&self) -> impl Iterator<Item = (Shift, &Session)> {
        Shift::ALL
            .into_iter()
            .flat_map(move |shift| self.bucket(shift).iter().map(move |s| (shift, s)))
    }
}

/// Calendar span of a week, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

const RANGE_SEPARATORS: [&str; 6] = ["→", "–", "—", " to ", " - ", "~"];

impl DateRange {
    /// Parse "01/04/2024 → 07/04/2024". Returns `None` for anything that
    /// does not yield two valid dates in ascending order.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        for sep in RANGE_SEPARATORS {
            if let Some((a, b)) = trimmed.split_once(sep) {
                return Self::from_parts(a, b);
            }
        }
        // "01/04/2024-07/04/2024": only unambiguous with a single dash
        if trimmed.matches('-').count() == 1 {
            let (a, b) = trimmed.split_once('-')?;
            return Self::from_parts(a, b);
        }
        None
    }

    fn from_parts(a: &str, b: &str) -> Option<Self> {
        let start = parse_schedule_date(a)?;
        let end = parse_schedule_date(b)?;
        (start <= end).then_some(DateRange { start, end })
    }
}

/// One teaching week of the semester
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Week {
    pub(crate) week_number: u32,
    pub(crate) date_range: String,
    pub(crate) days: BTreeMap<String, Day>,
}

impl Week {
    pub(crate) fn range(&self) -> Option<DateRange> {
        DateRange::parse(&self.date_range)
    }

    /// Days with their calendar dates, in chronological order.
    ///
    /// Empty when the date range cannot be parsed. Keys that are not a
    /// recognisable weekday are skipped.
    pub(crate) fn dated_days(&self) -> Vec<(NaiveDate, &Day)> {
        let Some(range) = self.range() else {
            return Vec::new();
        };
        let mut days: Vec<(NaiveDate, &Day)> = self
            .days
            .iter()
            .filter_map(|(name, day)| match parse_weekday(name) {
                Some(weekday) => Some((date_in_week(range.start, weekday), day)),
                None => {
                    tracing::debug!(week = self.week_number, key = %name, "skipping unknown weekday key");
                    None
                }
            })
            .collect();
        days.sort_by_key(|(date, _)| *date);
        days
    }

    pub(crate) fn day_on(&self, date: NaiveDate) -> Option<&Day> {
        self.dated_days()
            .into_iter()
            .find(|(d, _)| *d == date)
            .map(|(_, day)| day)
    }
}

/// The date within `[start, start + 7 days)` that falls on `weekday`
pub(crate) fn date_in_week(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (7 + weekday.num_days_from_monday() as i64
        - start.weekday().num_days_from_monday() as i64)
        % 7;
    start + Duration::days(offset)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Metadata {
    pub(crate) teacher_name: String,
    pub(crate) semester: String,
    pub(crate) academic_year: String,
}

/// A session placed on its calendar date
#[derive(Debug, Clone, Copy)]
pub(crate) struct DatedSession<'a> {
    pub(crate) week_index: usize,
    pub(crate) date: NaiveDate,
    pub(crate) shift: Shift,
    pub(crate) session: &'a Session,
}

/// A whole semester plus the user's corrections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Schedule {
    pub(crate) metadata: Metadata,
    pub(crate) weeks: Vec<Week>,
    /// Session-type corrections keyed by course code
    pub(crate) overrides: BTreeMap<String, SessionType>,
    /// Display-name substitutions keyed by course name
    pub(crate) abbreviations: BTreeMap<String, String>,
}

impl Schedule {
    pub(crate) fn effective_type(&self, session: &Session) -> SessionType {
        self.overrides
            .get(&session.course_code)
            .copied()
            .unwrap_or(session.session_type)
    }

    pub(crate) fn display_name<'a>(&'a self, session: &'a Session) -> &'a str {
        self.abbreviations
            .get(&session.course_name)
            .map_or(session.course_name.as_str(), String::as_str)
    }

    /// Start of the first week whose date range parses
    pub(crate) fn first_start(&self) -> Option<NaiveDate> {
        self.weeks.iter().find_map(Week::range).map(|r| r.start)
    }

    /// End of the last week whose date range parses
    pub(crate) fn last_end(&self) -> Option<NaiveDate> {
        self.weeks.iter().rev().find_map(Week::range).map(|r| r.end)
    }

    /// Every session with its date, in week order then chronological order
    pub(crate) fn dated_sessions(&self) -> Vec<DatedSession<'_>> {
        let mut out = Vec::new();
        for (week_index, week) in self.weeks.iter().enumerate() {
            for (date, day) in week.dated_days() {
                for (shift, session) in day.sessions() {
                    out.push(DatedSession {
                        week_index,
                        date,
                        shift,
                        session,
                    });
                }
            }
        }
        out
    }

    pub(crate) fn sessions_on(&self, date: NaiveDate) -> Vec<DatedSession<'_>> {
        self.dated_sessions()
            .into_iter()
            .filter(|ds| ds.date == date)
            .collect()
    }

    pub(crate) fn week_index_by_number(&self, number: u32) -> Option<usize> {
        self.weeks.iter().position(|w| w.week_number == number)
    }

    /// Structural problems worth reporting; never fatal
    pub(crate) fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut previous: Option<DateRange> = None;
        for week in &self.weeks {
            let Some(range) = week.range() else {
                warnings.push(format!(
                    "week {}: unreadable date range \"{}\"",
                    week.week_number, week.date_range
                ));
                continue;
            };
            if (range.end - range.start).num_days() != 6 {
                warnings.push(format!(
                    "week {}: date range does not span 7 days",
                    week.week_number
                ));
            }
            if let Some(prev) = previous
                && range.start <= prev.end
            {
                warnings.push(format!(
                    "week {}: overlaps or precedes the previous week",
                    week.week_number
                ));
            }
            previous = Some(range);

            for (name, day) in &week.days {
                if parse_weekday(name).is_none() {
                    warnings.push(format!(
                        "week {}: unknown weekday \"{}\"",
                        week.week_number, name
                    ));
                }
                for (shift, session) in day.sessions() {
                    if let Some(tag) = session.session_time
                        && tag != shift
                    {
                        warnings.push(format!(
                            "week {}: {} is tagged {:?} but listed under {:?}",
                            week.week_number, session.course_code, tag, shift
                        ));
                    }
                    if session.period_range().is_none() {
                        warnings.push(format!(
                            "week {}: {} has unreadable time slot \"{}\"",
                            week.week_number, session.course_code, session.time_slot
                        ));
                    }
                }
            }
        }
        warnings
    }
}
