//! Schedule document parsing

use std::fs;
use std::path::Path;

use crate::core::Schedule;
use crate::error::AppError;

/// Parse a schedule document.
///
/// Markup (anything whose first non-blank character is `<`) is rejected
/// with a dedicated error instead of a JSON syntax message.
pub(crate) fn parse_schedule(content: &str) -> Result<Schedule, AppError> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput);
    }
    if trimmed.starts_with('<') {
        return Err(AppError::MarkupUnsupported);
    }

    let schedule: Schedule =
        serde_json::from_str(trimmed).map_err(|e| AppError::ScheduleParse(e.to_string()))?;

    for warning in schedule.validate() {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(
        weeks = schedule.weeks.len(),
        sessions = schedule.dated_sessions().len(),
        "parsed schedule"
    );
    Ok(schedule)
}

pub(crate) fn load_schedule_file(path: &Path) -> Result<Schedule, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    parse_schedule(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "metadata": {"teacherName": "Nguyễn Văn An", "semester": "HK2", "academicYear": "2023-2024"},
        "weeks": [{
            "weekNumber": 1,
            "dateRange": "01/04/2024 → 07/04/2024",
            "days": {
                "monday": {
                    "morning": [{
                        "courseCode": "IT001",
                        "courseName": "Lập trình",
                        "teacher": "Nguyễn Văn An",
                        "room": "A1.101",
                        "timeSlot": "1-3",
                        "type": "theory",
                        "periodCount": 3
                    }]
                }
            }
        }]
    }"#;

    #[test]
    fn parses_schedule_document() {
        let schedule = parse_schedule(SAMPLE).unwrap();
        assert_eq!(schedule.metadata.teacher_name, "Nguyễn Văn An");
        assert_eq!(schedule.weeks.len(), 1);
        assert_eq!(schedule.dated_sessions().len(), 1);
        assert!(schedule.overrides.is_empty());
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let content = format!("\u{feff}{SAMPLE}");
        assert!(parse_schedule(&content).is_ok());
    }

    #[test]
    fn markup_is_rejected() {
        let err = parse_schedule("  <html><body><table></table></body></html>").unwrap_err();
        assert!(matches!(err, AppError::MarkupUnsupported));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_schedule(" \n "), Err(AppError::EmptyInput)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_schedule("{\"weeks\": [").unwrap_err();
        assert!(matches!(err, AppError::ScheduleParse(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_schedule(r#"{"weeks": 3}"#).unwrap_err();
        assert!(matches!(err, AppError::ScheduleParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schedule_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let schedule = load_schedule_file(&path).unwrap();
        assert_eq!(schedule.weeks[0].week_number, 1);
    }
}
