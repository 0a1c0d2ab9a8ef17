use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// `[timetable]` table: institution period times
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TimetableConfig {
    /// Nominal start of each period ("HH:MM"), period 1 first
    #[serde(default)]
    pub(crate) periods: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) theory_minutes: Option<i64>,
    #[serde(default)]
    pub(crate) practice_minutes: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) teacher: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Base URL or directory holding demo schedules
    #[serde(default)]
    pub(crate) demo_source: Option<String>,
    #[serde(default)]
    pub(crate) tick_seconds: Option<u64>,
    #[serde(default)]
    pub(crate) timetable: TimetableConfig,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/teachdash/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("teachdash").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/teachdash/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("teachdash").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.teachdash.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".teachdash.toml"));
        }

        paths
    }
}
