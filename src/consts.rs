/// Date format used when echoing a schedule's own dates: "01/04/2024"
pub(crate) const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Nominal start time of each period, period 1 first.
///
/// Institution timetable; a theory session "1-3" runs 08:00 to 10:30.
pub(crate) const DEFAULT_PERIOD_STARTS: [&str; 14] = [
    "08:00", "08:50", "09:45", "10:35", "11:25", // morning
    "13:00", "13:50", "14:45", "15:35", "16:25", // afternoon
    "18:00", "18:50", "19:40", "20:30", // evening
];

/// Minutes a theory period lasts
pub(crate) const THEORY_MINUTES: i64 = 45;

/// Minutes a practice period lasts
pub(crate) const PRACTICE_MINUTES: i64 = 60;

/// Seconds between refreshes in watch mode
pub(crate) const DEFAULT_TICK_SECONDS: u64 = 60;

/// Fallback for missing room, class or teacher text
pub(crate) const UNKNOWN: &str = "-";
