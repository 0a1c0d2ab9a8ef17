mod format;
mod labels;
mod overview;
mod rows;
mod settings;
mod stats;
mod statusline;
mod today;
mod week;

pub(crate) use format::ViewOptions;
pub(crate) use overview::{output_overview_json, print_overview};
pub(crate) use rows::ViewContext;
pub(crate) use settings::{output_about_json, output_settings_json, print_about, print_settings};
pub(crate) use stats::{output_stats_json, print_stats};
pub(crate) use statusline::{output_statusline_json, print_statusline};
pub(crate) use today::{output_next_json, output_today_json, print_next, print_today};
pub(crate) use week::{output_week_json, print_week};
