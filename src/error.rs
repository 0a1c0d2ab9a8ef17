use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD, YYYY-MM-DD or DD/MM/YYYY)")]
    InvalidDate { input: String },

    #[error("Invalid date/time \"{input}\" (expected \"YYYY-MM-DD HH:MM\")")]
    InvalidDateTime { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid period start time \"{input}\" in timetable (expected HH:MM)")]
    InvalidPeriodTime { input: String },

    #[error("Invalid {key} = {minutes} in timetable (expected 1 to 1440 minutes)")]
    InvalidPeriodLength { key: &'static str, minutes: i64 },

    #[error("Week {number} does not exist in the loaded schedule")]
    InvalidWeek { number: u32 },

    #[error("Unknown session type \"{input}\" (expected theory or practice)")]
    InvalidSessionType { input: String },

    #[error("Unsupported theme: {input} (expected light, dark or system)")]
    UnsupportedTheme { input: String },

    #[error("Unsupported language: {input} (expected vi or en)")]
    UnsupportedLanguage { input: String },

    #[error("Invalid demo code \"{input}\"")]
    InvalidDemoCode { input: String },

    #[error("Could not read schedule: {0}")]
    ScheduleParse(String),

    #[error("The schedule is in markup form; export it as JSON and load that file instead")]
    MarkupUnsupported,

    #[error("The schedule document is empty")]
    EmptyInput,

    #[error("Could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Demo schedule \"{code}\" not found")]
    DemoNotFound { code: String },

    #[error("No demo source configured (set demo_source in the config file)")]
    NoDemoSource,

    #[error("No schedule loaded. Run `teachdash load <file>` first.")]
    NoSchedule,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
