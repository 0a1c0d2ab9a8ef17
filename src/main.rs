mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod state;
mod store;
mod utils;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{CommandContext, run_command};
use crate::cli::Cli;
use crate::config::Config;
use crate::consts::DEFAULT_TICK_SECONDS;
use crate::core::{Clock, FixedClock, SystemClock, Timetable};
use crate::error::AppError;
use crate::source::DemoSource;
use crate::state::AppState;
use crate::store::{Store, default_data_dir};
use crate::utils::{Timezone, parse_datetime};

/// Logs go to stderr so that JSON on stdout stays clean
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TEACHDASH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let clock: Box<dyn Clock> = match cli.now.as_deref() {
        Some(raw) => Box::new(FixedClock(parse_datetime(raw)?)),
        None => Box::new(SystemClock::new(timezone)),
    };
    let timetable = Timetable::from_config(&config.timetable)?;

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(default_data_dir)
        .unwrap_or_else(|| PathBuf::from(".teachdash"));
    let store = Store::open(&data_dir)?;
    let mut state = AppState::load(store)?;

    let ctx = CommandContext {
        cli,
        clock: clock.as_ref(),
        timetable: &timetable,
        timezone_label: timezone.label(),
        demo_source: config.demo_source.as_deref().map(DemoSource::parse),
        tick: Duration::from_secs(config.tick_seconds.unwrap_or(DEFAULT_TICK_SECONDS).max(1)),
    };
    run_command(&mut state, &ctx)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
