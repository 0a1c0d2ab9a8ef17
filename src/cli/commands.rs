//! CLI subcommand definitions

use clap::Subcommand;
use std::path::PathBuf;

use crate::state::{Language, Theme};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show today's sessions and progress (default)
    Today,
    /// Show one week as a weekday × shift grid
    Week {
        /// Week number as written in the schedule (default: current week)
        #[arg(short, long)]
        week: Option<u32>,
    },
    /// Show every week of the semester
    Overview,
    /// Show progress, per-course totals and conflicts
    Stats,
    /// Show the next day with teaching left
    Next,
    /// Load a schedule from a JSON file, replacing the current one
    Load {
        /// Path to the schedule document
        path: PathBuf,
    },
    /// Load a demo schedule by code
    Demo {
        /// Demo code, e.g. "gv01"
        code: String,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Show version, data location and schedule metadata
    About,
    /// Output single line for statusline/tmux integration
    Statusline,
    /// Re-render the today view periodically
    Watch {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Discard the stored schedule
    Reset,
}

#[derive(Subcommand)]
pub(crate) enum SettingsCommands {
    /// Show current settings (default)
    Show,
    /// Force a course's session type
    Override {
        /// Course code
        code: String,
        /// theory or practice
        session_type: String,
    },
    /// Remove a session-type override
    ClearOverride {
        code: String,
    },
    /// Display a course under a shorter name
    Abbrev {
        /// Course name as written in the schedule
        name: String,
        short: String,
    },
    /// Remove an abbreviation
    ClearAbbrev {
        name: String,
    },
    /// Set the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Set the display language
    Language {
        #[arg(value_enum)]
        language: Language,
    },
}
