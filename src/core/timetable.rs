//! Period → clock-time table
//!
//! The table is configuration data: an institution's period start times and
//! the length of a period for each session type.

use chrono::{Duration, NaiveTime};

use crate::config::TimetableConfig;
use crate::consts::{DEFAULT_PERIOD_STARTS, PRACTICE_MINUTES, THEORY_MINUTES};
use crate::core::types::{PeriodRange, SessionType};
use crate::error::AppError;
use crate::utils::parse_clock_time;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone)]
pub(crate) struct Timetable {
    /// Nominal start of each period; index 0 is period 1
    period_starts: Vec<NaiveTime>,
    theory_minutes: i64,
    practice_minutes: i64,
}

impl Default for Timetable {
    fn default() -> Self {
        let period_starts = DEFAULT_PERIOD_STARTS
            .iter()
            .filter_map(|s| parse_clock_time(s))
            .collect();
        Timetable {
            period_starts,
            theory_minutes: THEORY_MINUTES,
            practice_minutes: PRACTICE_MINUTES,
        }
    }
}

/// A period lasts at least a minute and at most a day
fn period_length(key: &'static str, minutes: i64) -> Result<i64, AppError> {
    if (1..=MINUTES_PER_DAY).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(AppError::InvalidPeriodLength { key, minutes })
    }
}

impl Timetable {
    pub(crate) fn from_config(config: &TimetableConfig) -> Result<Self, AppError> {
        let mut table = Timetable::default();
        if let Some(periods) = &config.periods {
            table.period_starts = periods
                .iter()
                .map(|raw| {
                    parse_clock_time(raw).ok_or_else(|| AppError::InvalidPeriodTime {
                        input: raw.clone(),
                    })
                })
                .collect::<Result<_, _>>()?;
        }
        if let Some(minutes) = config.theory_minutes {
            table.theory_minutes = period_length("theory_minutes", minutes)?;
        }
        if let Some(minutes) = config.practice_minutes {
            table.practice_minutes = period_length("practice_minutes", minutes)?;
        }
        Ok(table)
    }

    pub(crate) fn period_start(&self, period: u32) -> Option<NaiveTime> {
        let index = usize::try_from(period).ok()?.checked_sub(1)?;
        self.period_starts.get(index).copied()
    }

    pub(crate) fn minutes_per_period(&self, session_type: SessionType) -> i64 {
        match session_type {
            SessionType::Theory => self.theory_minutes,
            SessionType::Practice => self.practice_minutes,
        }
    }

    pub(crate) fn period_count(&self) -> usize {
        self.period_starts.len()
    }

    /// Start and true end of a session.
    ///
    /// The end is the last period's nominal start plus one period of the
    /// session's type. An end past midnight is clamped to 23:59:59.
    pub(crate) fn session_window(
        &self,
        range: PeriodRange,
        session_type: SessionType,
    ) -> Option<(NaiveTime, NaiveTime)> {
        let start = self.period_start(range.start)?;
        let last = self.period_start(range.end)?;
        let (end, wrapped) =
            last.overflowing_add_signed(Duration::minutes(self.minutes_per_period(session_type)));
        let end = if wrapped != 0 {
            NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(last)
        } else {
            end
        };
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn default_table_has_every_period() {
        let table = Timetable::default();
        assert_eq!(table.period_count(), DEFAULT_PERIOD_STARTS.len());
        assert_eq!(table.period_start(1), Some(hm(8, 0)));
        assert_eq!(table.period_start(3), Some(hm(9, 45)));
        assert_eq!(table.period_start(14), Some(hm(20, 30)));
        assert_eq!(table.period_start(0), None);
        assert_eq!(table.period_start(15), None);
    }

    #[test]
    fn theory_window_adds_one_theory_period() {
        let table = Timetable::default();
        let window = table.session_window(PeriodRange { start: 1, end: 3 }, SessionType::Theory);
        assert_eq!(window, Some((hm(8, 0), hm(10, 30))));
    }

    #[test]
    fn practice_window_adds_one_practice_period() {
        let table = Timetable::default();
        let window =
            table.session_window(PeriodRange { start: 6, end: 8 }, SessionType::Practice);
        assert_eq!(window, Some((hm(13, 0), hm(15, 45))));
    }

    #[test]
    fn unknown_period_has_no_window() {
        let table = Timetable::default();
        assert!(table
            .session_window(PeriodRange { start: 13, end: 16 }, SessionType::Theory)
            .is_none());
    }

    #[test]
    fn config_replaces_periods_and_durations() {
        let config = TimetableConfig {
            periods: Some(vec!["07:00".to_string(), "07:50".to_string()]),
            theory_minutes: Some(50),
            practice_minutes: None,
        };
        let table = Timetable::from_config(&config).unwrap();
        assert_eq!(table.period_count(), 2);
        assert_eq!(table.minutes_per_period(SessionType::Theory), 50);
        assert_eq!(
            table.minutes_per_period(SessionType::Practice),
            PRACTICE_MINUTES
        );
    }

    #[test]
    fn config_with_bad_time_is_rejected() {
        let config = TimetableConfig {
            periods: Some(vec!["7:00".to_string(), "lunch".to_string()]),
            ..Default::default()
        };
        let err = Timetable::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("lunch"));
    }

    #[test]
    fn config_rejects_out_of_range_period_lengths() {
        for minutes in [0, -45, i64::MAX, MINUTES_PER_DAY + 1] {
            let config = TimetableConfig {
                theory_minutes: Some(minutes),
                ..Default::default()
            };
            let err = Timetable::from_config(&config).unwrap_err();
            assert!(matches!(
                err,
                AppError::InvalidPeriodLength { key: "theory_minutes", minutes: m } if m == minutes
            ));
        }

        let config = TimetableConfig {
            practice_minutes: Some(-1),
            ..Default::default()
        };
        let err = Timetable::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("practice_minutes = -1"));
    }

    #[test]
    fn full_day_period_length_is_accepted() {
        let table = Timetable::from_config(&TimetableConfig {
            theory_minutes: Some(MINUTES_PER_DAY),
            ..Default::default()
        })
        .unwrap();
        let (start, end) = table
            .session_window(PeriodRange { start: 1, end: 3 }, SessionType::Theory)
            .unwrap();
        assert_eq!(start, hm(8, 0));
        assert_eq!(end, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }

    #[test]
    fn late_practice_end_is_clamped_before_midnight() {
        let table = Timetable::from_config(&TimetableConfig {
            periods: Some(vec!["23:30".to_string()]),
            ..Default::default()
        })
        .unwrap();
        let (_, end) = table
            .session_window(PeriodRange { start: 1, end: 1 }, SessionType::Practice)
            .unwrap();
        assert_eq!(end, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
    }
}
