//! Teaching progress over today / week / month / semester
//!
//! Recomputed from scratch on every evaluation; a semester is small enough
//! that there is nothing to maintain incrementally.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use crate::core::classify::{SessionStatus, classify_dated, current_week_index};
use crate::core::names::TeacherFilter;
use crate::core::timetable::Timetable;
use crate::core::types::Schedule;

/// Completed vs scheduled periods in one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct Progress {
    pub(crate) percent: u32,
    pub(crate) completed_periods: u32,
    pub(crate) total_periods: u32,
}

impl Progress {
    pub(crate) fn from_counts(completed_periods: u32, total_periods: u32) -> Self {
        Progress {
            percent: percent(completed_periods, total_periods),
            completed_periods,
            total_periods,
        }
    }
}

/// `round(completed / total * 100)`, 0 for an empty window
pub(crate) fn percent(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(completed.min(total)) / f64::from(total);
    (ratio * 100.0).round() as u32
}

#[derive(Debug, Default, Clone, Copy)]
struct Window {
    completed: u32,
    total: u32,
}

impl Window {
    fn add(&mut self, periods: u32, completed: bool) {
        self.total = self.total.saturating_add(periods);
        if completed {
            self.completed = self.completed.saturating_add(periods);
        }
    }

    fn finish(self) -> Progress {
        Progress::from_counts(self.completed, self.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct ProgressReport {
    pub(crate) today: Progress,
    pub(crate) week: Progress,
    pub(crate) month: Progress,
    pub(crate) semester: Progress,
}

/// Aggregate the primary teacher's periods into the four windows.
///
/// A session counts toward every window it falls in.
pub(crate) fn compute_progress(
    schedule: &Schedule,
    teacher: &str,
    now: NaiveDateTime,
    timetable: &Timetable,
) -> ProgressReport {
    let today = now.date();
    let current_week = current_week_index(schedule, now);

    let mut today_w = Window::default();
    let mut week_w = Window::default();
    let mut month_w = Window::default();
    let mut semester_w = Window::default();

    let filter = TeacherFilter::new(teacher);
    for dated in schedule.dated_sessions() {
        if !filter.matches(&dated.session.teacher) {
            continue;
        }
        let periods = dated.session.periods();
        let completed =
            classify_dated(schedule, &dated, now, timetable) == SessionStatus::Completed;

        semester_w.add(periods, completed);
        if dated.date == today {
            today_w.add(periods, completed);
        }
        if current_week == Some(dated.week_index) {
            week_w.add(periods, completed);
        }
        if dated.date.year() == today.year() && dated.date.month() == today.month() {
            month_w.add(periods, completed);
        }
    }

    ProgressReport {
        today: today_w.finish(),
        week: week_w.finish(),
        month: month_w.finish(),
        semester: semester_w.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Day, Session, Week};
    use crate::utils::parse_datetime;

    fn at(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    fn session(teacher: &str, slot: &str, periods: u32) -> Session {
        Session {
            course_code: "IT001".to_string(),
            teacher: teacher.to_string(),
            time_slot: slot.to_string(),
            period_count: periods,
            ..Default::default()
        }
    }

    /// Two weeks: week 1 (Apr 1-7) has Mon morning + Wed morning,
    /// week 2 (Apr 29 - May 5) has a Thursday session in May.
    fn sample() -> Schedule {
        let mut w1 = Week {
            week_number: 1,
            date_range: "01/04/2024 → 07/04/2024".to_string(),
            ..Default::default()
        };
        w1.days.insert(
            "monday".to_string(),
            Day {
                morning: vec![session("ThS. Nguyễn Văn An", "1-3", 3)],
                ..Default::default()
            },
        );
        w1.days.insert(
            "wednesday".to_string(),
            Day {
                morning: vec![session("Nguyen Van An", "1-2", 2)],
                afternoon: vec![session("Trần Thị Bích", "6-8", 3)],
                ..Default::default()
            },
        );
        let mut w2 = Week {
            week_number: 2,
            date_range: "29/04/2024 → 05/05/2024".to_string(),
            ..Default::default()
        };
        w2.days.insert(
            "thursday".to_string(),
            Day {
                evening: vec![session("Nguyễn Văn An", "11-12", 2)],
                ..Default::default()
            },
        );
        Schedule {
            weeks: vec![w1, w2],
            ..Default::default()
        }
    }

    #[test]
    fn percent_rounds_and_handles_zero_total() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(5, 3), 100);
    }

    #[test]
    fn windows_mid_week() {
        let report = compute_progress(
            &sample(),
            "Nguyễn Văn An",
            at("2024-04-03 09:00"),
            &Timetable::default(),
        );
        // Monday's 3 periods are done; Wednesday's 2 are live
        assert_eq!(report.today, Progress::from_counts(0, 2));
        assert_eq!(report.week, Progress::from_counts(3, 5));
        assert_eq!(report.week.percent, 60);
        assert_eq!(report.month, Progress::from_counts(3, 5));
        assert_eq!(report.semester, Progress::from_counts(3, 7));
    }

    #[test]
    fn other_teachers_are_excluded() {
        let report = compute_progress(
            &sample(),
            "Trần Thị Bích",
            at("2024-04-03 20:00"),
            &Timetable::default(),
        );
        assert_eq!(report.semester, Progress::from_counts(3, 3));
        assert_eq!(report.semester.percent, 100);
    }

    #[test]
    fn empty_teacher_counts_everyone() {
        let report = compute_progress(&sample(), "", at("2024-04-03 20:00"), &Timetable::default());
        assert_eq!(report.semester.total_periods, 10);
        assert_eq!(report.semester.completed_periods, 8);
    }

    #[test]
    fn month_window_follows_calendar_month() {
        let report = compute_progress(
            &sample(),
            "Nguyễn Văn An",
            at("2024-05-02 21:00"),
            &Timetable::default(),
        );
        assert_eq!(report.month, Progress::from_counts(2, 2));
        assert_eq!(report.week, Progress::from_counts(2, 2));
        assert_eq!(report.today, Progress::from_counts(2, 2));
        assert_eq!(report.semester.percent, 100);
    }

    #[test]
    fn empty_windows_are_zero_percent() {
        let report = compute_progress(
            &sample(),
            "Nguyễn Văn An",
            at("2024-06-15 10:00"),
            &Timetable::default(),
        );
        assert_eq!(report.today, Progress::default());
        assert_eq!(report.week, Progress::default());
        assert_eq!(report.month, Progress::default());
        assert_eq!(report.semester.percent, 100);
    }

    #[test]
    fn semester_percent_never_decreases_over_time() {
        let schedule = sample();
        let table = Timetable::default();
        let mut last = 0;
        let mut t = at("2024-03-31 00:00");
        while t < at("2024-05-06 00:00") {
            let p = compute_progress(&schedule, "", t, &table).semester.percent;
            assert!(p >= last, "progress went back at {t}");
            assert!(p <= 100);
            last = p;
            t += chrono::Duration::minutes(30);
        }
        assert_eq!(last, 100);
    }

    const HUGE_PERIODS: &str = r#"{
        "weeks": [{
            "weekNumber": 1,
            "dateRange": "01/04/2024 → 07/04/2024",
            "days": {"monday": {"morning": [
                {"courseCode": "IT001", "timeSlot": "1-3", "periodCount": 4000000000},
                {"courseCode": "IT002", "timeSlot": "4-5", "periodCount": 4000000000}
            ]}}
        }]
    }"#;

    #[test]
    fn oversized_period_counts_saturate() {
        let schedule = crate::source::parse_schedule(HUGE_PERIODS).unwrap();
        let report = compute_progress(&schedule, "", at("2024-04-03 10:00"), &Timetable::default());
        assert_eq!(report.semester, Progress::from_counts(u32::MAX, u32::MAX));
        assert_eq!(report.semester.percent, 100);
        assert_eq!(report.week.total_periods, u32::MAX);
        assert_eq!(report.today, Progress::default());

        let summaries =
            crate::core::week_summaries(&schedule, "", at("2024-04-03 10:00"), &Timetable::default());
        assert_eq!(summaries[0].progress.total_periods, u32::MAX);
        assert_eq!(summaries[0].progress.percent, 100);
    }

    #[test]
    fn no_weeks_no_progress() {
        let report = compute_progress(
            &Schedule::default(),
            "anyone",
            at("2024-04-03 09:00"),
            &Timetable::default(),
        );
        assert_eq!(report, ProgressReport::default());
    }
}
