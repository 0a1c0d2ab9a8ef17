use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::AppError;
use crate::utils::text::fold_diacritics;

/// Parse a date given on the command line (YYYYMMDD, YYYY-MM-DD or DD/MM/YYYY)
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse an evaluation instant such as "2024-04-03 10:00".
///
/// A bare date means midnight of that day.
pub(crate) fn parse_datetime(s: &str) -> Result<NaiveDateTime, AppError> {
    let trimmed = s.trim();
    for fmt in [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%d/%m/%Y %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = parse_date(trimmed) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(AppError::InvalidDateTime {
        input: s.to_string(),
    })
}

/// Parse a date as it appears inside a schedule document.
pub(crate) fn parse_schedule_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a wall-clock time ("07:30", "7:30", "7h30")
pub(crate) fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let trimmed = s.trim().to_ascii_lowercase();
    let normalized = trimmed.replace('h', ":");
    let normalized = if normalized.ends_with(':') {
        format!("{normalized}00")
    } else {
        normalized
    };
    NaiveTime::parse_from_str(&normalized, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&normalized, "%H:%M:%S"))
        .ok()
}

/// Map a weekday key of the schedule document to a weekday.
///
/// Accepts English names and abbreviations, Vietnamese names with or
/// without diacritics ("Thứ 2", "thu 2", "T2", "Chủ nhật", "CN") and the
/// bare Vietnamese day numbers 2..8 (8 being Sunday).
pub(crate) fn parse_weekday(name: &str) -> Option<Weekday> {
    let folded = fold_diacritics(&name.trim().to_lowercase());
    let compact: String = folded.chars().filter(|c| !c.is_whitespace()).collect();

    let english = match compact.as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        "chunhat" | "cn" => Some(Weekday::Sun),
        _ => None,
    };
    if english.is_some() {
        return english;
    }

    let number = compact
        .strip_prefix("thu")
        .or_else(|| compact.strip_prefix('t'))
        .unwrap_or(&compact);
    match number {
        "2" | "hai" => Some(Weekday::Mon),
        "3" | "ba" => Some(Weekday::Tue),
        "4" | "tu" => Some(Weekday::Wed),
        "5" | "nam" => Some(Weekday::Thu),
        "6" | "sau" => Some(Weekday::Fri),
        "7" | "bay" => Some(Weekday::Sat),
        "8" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_three_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(parse_date("20240401").unwrap(), expected);
        assert_eq!(parse_date("2024-04-01").unwrap(), expected);
        assert_eq!(parse_date("01/04/2024").unwrap(), expected);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn parse_datetime_with_minutes() {
        let dt = parse_datetime("2024-04-03 10:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-04-03 10:00");
    }

    #[test]
    fn parse_datetime_bare_date_is_midnight() {
        let dt = parse_datetime("2024-04-08").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("soon").is_err());
    }

    #[test]
    fn schedule_date_day_first() {
        assert_eq!(
            parse_schedule_date(" 07/04/2024 "),
            NaiveDate::from_ymd_opt(2024, 4, 7)
        );
        assert_eq!(parse_schedule_date("2024-04-07"), NaiveDate::from_ymd_opt(2024, 4, 7));
        assert_eq!(parse_schedule_date("31/02/2024"), None);
    }

    #[test]
    fn clock_time_variants() {
        let t = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        assert_eq!(parse_clock_time("07:30"), Some(t));
        assert_eq!(parse_clock_time("7:30"), Some(t));
        assert_eq!(parse_clock_time("7h30"), Some(t));
        assert_eq!(parse_clock_time("13h"), NaiveTime::from_hms_opt(13, 0, 0));
        assert_eq!(parse_clock_time("25:00"), None);
    }

    #[test]
    fn weekday_english_names() {
        assert_eq!(parse_weekday("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("sun"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("Thursday"), Some(Weekday::Thu));
    }

    #[test]
    fn weekday_vietnamese_names() {
        assert_eq!(parse_weekday("Thứ 2"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("thu 7"), Some(Weekday::Sat));
        assert_eq!(parse_weekday("T5"), Some(Weekday::Thu));
        assert_eq!(parse_weekday("Chủ nhật"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("CN"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("8"), Some(Weekday::Sun));
    }

    #[test]
    fn weekday_unknown() {
        assert_eq!(parse_weekday("someday"), None);
        assert_eq!(parse_weekday("9"), None);
    }
}
