//! Demo schedules fetched by code
//!
//! A demo location is either an `http(s)://` base URL or a local directory.
//! `<code>.json` is tried first, then `<code>.html`.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::Schedule;
use crate::error::AppError;
use crate::source::loader::parse_schedule;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const DEMO_EXTENSIONS: [&str; 2] = ["json", "html"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DemoSource {
    Remote(String),
    Directory(PathBuf),
}

impl DemoSource {
    pub(crate) fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DemoSource::Remote(trimmed.trim_end_matches('/').to_string())
        } else {
            DemoSource::Directory(PathBuf::from(trimmed))
        }
    }

    fn read(&self, file_name: &str) -> Option<String> {
        match self {
            DemoSource::Remote(base) => fetch_remote(&format!("{base}/{file_name}")),
            DemoSource::Directory(dir) => {
                let path = dir.join(file_name);
                match std::fs::read_to_string(&path) {
                    Ok(content) => Some(content),
                    Err(e) => {
                        tracing::debug!("{}: {}", path.display(), e);
                        None
                    }
                }
            }
        }
    }
}

fn fetch_remote(url: &str) -> Option<String> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into();

    match agent.get(url).call() {
        Ok(response) => match response.into_body().read_to_string() {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("{}: {}", url, e);
                None
            }
        },
        Err(e) => {
            tracing::debug!("{}: {}", url, e);
            None
        }
    }
}

fn validate_code(code: &str) -> Result<&str, AppError> {
    let code = code.trim();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(code)
    } else {
        Err(AppError::InvalidDemoCode {
            input: code.to_string(),
        })
    }
}

/// Fetch and parse the demo schedule named `code`.
///
/// A document that was found but cannot be used (markup, bad JSON) keeps
/// its own error; only a missing document becomes `DemoNotFound`.
pub(crate) fn fetch_demo(source: &DemoSource, code: &str) -> Result<Schedule, AppError> {
    let code = validate_code(code)?;
    for extension in DEMO_EXTENSIONS {
        let file_name = format!("{code}.{extension}");
        if let Some(content) = source.read(&file_name) {
            tracing::info!("Fetched demo {}", file_name);
            return parse_schedule(&content);
        }
    }
    Err(AppError::DemoNotFound {
        code: code.to_string(),
    })
}
