use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use crate::cli::{Cli, Commands, SettingsCommands};
use crate::core::{Clock, Schedule, SessionType, Timetable, resolve_week_index};
use crate::error::AppError;
use crate::output::{
    ViewContext, ViewOptions, output_about_json, output_next_json, output_overview_json,
    output_settings_json, output_stats_json, output_statusline_json, output_today_json,
    output_week_json, print_about, print_next, print_overview, print_settings, print_stats,
    print_statusline, print_today, print_week,
};
use crate::source::{DemoSource, fetch_demo, load_schedule_file};
use crate::state::{AppState, View};

fn print_json(json: &str) {
    println!("{json}");
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) clock: &'a dyn Clock,
    pub(crate) timetable: &'a Timetable,
    pub(crate) timezone_label: String,
    pub(crate) demo_source: Option<DemoSource>,
    pub(crate) tick: Duration,
}

impl CommandContext<'_> {
    fn options(&self, state: &AppState) -> ViewOptions {
        ViewOptions {
            use_color: self.cli.use_color(),
            compact: self.cli.compact,
            theme: state.theme(),
            language: state.language(),
        }
    }

    /// Primary teacher: the flag or config value, else the schedule's own
    fn teacher<'s>(&'s self, state: &'s AppState) -> &'s str {
        if let Some(name) = self.cli.teacher.as_deref() {
            return name;
        }
        state
            .schedule()
            .map_or("", |s| s.metadata.teacher_name.as_str())
    }

    /// Snapshot of "now" and the rendering options for one render
    fn view<'s>(&'s self, state: &'s AppState) -> ViewContext<'s> {
        ViewContext {
            now: self.clock.now(),
            timetable: self.timetable,
            teacher: self.teacher(state),
            options: self.options(state),
        }
    }
}

fn handle_today(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    state.view = View::Today;
    let view = ctx.view(state);
    if ctx.cli.json {
        print_json(&output_today_json(state.schedule(), &view)?);
    } else {
        print_today(state.schedule(), &view);
    }
    Ok(())
}

fn handle_week(
    state: &mut AppState,
    ctx: &CommandContext<'_>,
    week: Option<u32>,
) -> Result<(), AppError> {
    state.view = View::Week;
    let schedule = state.require_schedule()?;
    let view = ctx.view(state);
    let index = resolve_week_index(schedule, view.now, week)?;
    if ctx.cli.json {
        print_json(&output_week_json(schedule, index, &view)?);
    } else {
        print_week(schedule, index, &view);
    }
    Ok(())
}

fn handle_overview(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    state.view = View::Overview;
    let schedule = state.require_schedule()?;
    let view = ctx.view(state);
    if ctx.cli.json {
        print_json(&output_overview_json(schedule, &view)?);
    } else {
        print_overview(schedule, &view);
    }
    Ok(())
}

fn handle_stats(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    state.view = View::Statistics;
    let schedule = state.require_schedule()?;
    let view = ctx.view(state);
    if ctx.cli.json {
        print_json(&output_stats_json(schedule, &view)?);
    } else {
        print_stats(schedule, &view);
    }
    Ok(())
}

fn handle_next(state: &AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let schedule = state.require_schedule()?;
    let view = ctx.view(state);
    if ctx.cli.json {
        print_json(&output_next_json(schedule, &view)?);
    } else {
        print_next(schedule, &view);
    }
    Ok(())
}

fn report_loaded(schedule: &Schedule, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let weeks = schedule.weeks.len();
    let sessions = schedule.dated_sessions().len();
    if ctx.cli.json {
        let output = serde_json::json!({
            "teacher_name": schedule.metadata.teacher_name,
            "semester": schedule.metadata.semester,
            "academic_year": schedule.metadata.academic_year,
            "weeks": weeks,
            "sessions": sessions,
        });
        print_json(&serde_json::to_string_pretty(&output)?);
    } else {
        let teacher = &schedule.metadata.teacher_name;
        if teacher.is_empty() {
            println!("Loaded {weeks} weeks, {sessions} sessions.");
        } else {
            println!("Loaded {weeks} weeks, {sessions} sessions for {teacher}.");
        }
    }
    Ok(())
}

/// Replace the stored schedule only once the new one parsed
fn handle_load(state: &mut AppState, ctx: &CommandContext<'_>, path: &Path) -> Result<(), AppError> {
    let schedule = load_schedule_file(path)?;
    state.replace_schedule(schedule)?;
    state.view = View::Today;
    report_loaded(state.require_schedule()?, ctx)
}

fn handle_demo(state: &mut AppState, ctx: &CommandContext<'_>, code: &str) -> Result<(), AppError> {
    let source = ctx.demo_source.as_ref().ok_or(AppError::NoDemoSource)?;
    let schedule = fetch_demo(source, code)?;
    state.replace_schedule(schedule)?;
    state.view = View::Today;
    report_loaded(state.require_schedule()?, ctx)
}

fn show_settings(state: &AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    if ctx.cli.json {
        print_json(&output_settings_json(state)?);
    } else {
        print_settings(state, &ctx.options(state));
    }
    Ok(())
}

fn handle_settings(
    state: &mut AppState,
    ctx: &CommandContext<'_>,
    command: Option<&SettingsCommands>,
) -> Result<(), AppError> {
    state.view = View::Settings;
    match command {
        None | Some(SettingsCommands::Show) => {}
        Some(SettingsCommands::Override { code, session_type }) => {
            let kind =
                SessionType::parse(session_type).ok_or_else(|| AppError::InvalidSessionType {
                    input: session_type.clone(),
                })?;
            state.set_override(code, kind)?;
        }
        Some(SettingsCommands::ClearOverride { code }) => state.clear_override(code)?,
        Some(SettingsCommands::Abbrev { name, short }) => state.set_abbreviation(name, short)?,
        Some(SettingsCommands::ClearAbbrev { name }) => state.clear_abbreviation(name)?,
        Some(SettingsCommands::Theme { theme }) => state.set_theme(*theme)?,
        Some(SettingsCommands::Language { language }) => state.set_language(*language)?,
    }
    show_settings(state, ctx)
}

fn handle_about(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    state.view = View::About;
    if ctx.cli.json {
        print_json(&output_about_json(state, ctx.timetable, &ctx.timezone_label)?);
    } else {
        print_about(
            state,
            ctx.timetable,
            &ctx.timezone_label,
            &ctx.options(state),
        );
    }
    Ok(())
}

fn handle_statusline(state: &AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let view = ctx.view(state);
    if ctx.cli.json {
        print_json(&output_statusline_json(state.schedule(), &view)?);
    } else {
        print_statusline(state.schedule(), &view);
    }
    Ok(())
}

/// Re-evaluate and re-render the today view every tick
fn handle_watch(
    state: &mut AppState,
    ctx: &CommandContext<'_>,
    ticks: Option<u64>,
) -> Result<(), AppError> {
    let clear = !ctx.cli.json && std::io::stdout().is_terminal();
    let mut rendered = 0u64;
    loop {
        if clear {
            print!("\x1b[2J\x1b[H");
        }
        handle_today(state, ctx)?;
        rendered += 1;
        tracing::debug!(tick = rendered, "rendered");
        if ticks.is_some_and(|limit| rendered >= limit) {
            return Ok(());
        }
        std::thread::sleep(ctx.tick);
    }
}

fn handle_reset(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    state.reset()?;
    if ctx.cli.json {
        print_json(r#"{"reset": true}"#);
    } else {
        println!("Stored schedule discarded.");
    }
    Ok(())
}

/// Dispatch the parsed command
pub(crate) fn run_command(state: &mut AppState, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let result = match &ctx.cli.command {
        None | Some(Commands::Today) => handle_today(state, ctx),
        Some(Commands::Week { week }) => handle_week(state, ctx, *week),
        Some(Commands::Overview) => handle_overview(state, ctx),
        Some(Commands::Stats) => handle_stats(state, ctx),
        Some(Commands::Next) => handle_next(state, ctx),
        Some(Commands::Load { path }) => handle_load(state, ctx, path),
        Some(Commands::Demo { code }) => handle_demo(state, ctx, code),
        Some(Commands::Settings { command }) => handle_settings(state, ctx, command.as_ref()),
        Some(Commands::About) => handle_about(state, ctx),
        Some(Commands::Statusline) => handle_statusline(state, ctx),
        Some(Commands::Watch { ticks }) => handle_watch(state, ctx, *ticks),
        Some(Commands::Reset) => handle_reset(state, ctx),
    };
    tracing::debug!(view = ?state.view, ok = result.is_ok(), "command finished");
    result
}
