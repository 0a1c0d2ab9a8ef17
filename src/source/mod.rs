//! Where schedules come from
//!
//! A schedule is either a JSON file the user points at or a demo sample
//! fetched by code from the configured demo location.

mod demo;
mod loader;

pub(crate) use demo::{DemoSource, fetch_demo};
pub(crate) use loader::{load_schedule_file, parse_schedule};
