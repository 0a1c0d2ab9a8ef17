pub(crate) mod date;
pub(crate) mod text;
pub(crate) mod timezone;

pub(crate) use date::{parse_clock_time, parse_datetime, parse_schedule_date, parse_weekday};
pub(crate) use text::{collapse_whitespace, fold_diacritics};
pub(crate) use timezone::Timezone;
