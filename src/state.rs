//! Application state owned by the root controller
//!
//! The loaded schedule and the user's preferences live here and change only
//! through the actions below, each of which is persisted immediately.

use clap::ValueEnum;
use serde::Serialize;

use crate::core::{Schedule, SessionType};
use crate::error::AppError;
use crate::store::{LANGUAGE_KEY, SCHEDULE_KEY, Store, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" | "auto" => Ok(Theme::System),
            _ => Err(AppError::UnsupportedTheme {
                input: raw.to_string(),
            }),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        let base = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match base.as_str() {
            "vi" => Ok(Language::Vi),
            "en" => Ok(Language::En),
            _ => Err(AppError::UnsupportedLanguage {
                input: raw.to_string(),
            }),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }
}

/// Named views of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum View {
    #[default]
    Today,
    Week,
    Overview,
    Statistics,
    Settings,
    About,
}

pub(crate) struct AppState {
    store: Store,
    schedule: Option<Schedule>,
    pub(crate) view: View,
    theme: Theme,
    language: Language,
}

impl AppState {
    /// Restore the last session from the store
    pub(crate) fn load(store: Store) -> Result<Self, AppError> {
        let schedule = store.load_schedule()?;
        let theme = match store.get(THEME_KEY)? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}", e);
                Theme::default()
            }),
            None => Theme::default(),
        };
        let language = match store.get(LANGUAGE_KEY)? {
            Some(raw) => Language::parse(&raw).unwrap_or_else(|e| {
                tracing::warn!("{}", e);
                Language::default()
            }),
            None => Language::default(),
        };
        Ok(Self {
            store,
            schedule,
            view: View::default(),
            theme,
            language,
        })
    }

    pub(crate) fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub(crate) fn require_schedule(&self) -> Result<&Schedule, AppError> {
        self.schedule.as_ref().ok_or(AppError::NoSchedule)
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }

    /// Replace whatever schedule was loaded before
    pub(crate) fn replace_schedule(&mut self, schedule: Schedule) -> Result<(), AppError> {
        self.store.save_schedule(&schedule)?;
        tracing::info!(
            weeks = schedule.weeks.len(),
            teacher = %schedule.metadata.teacher_name,
            "schedule replaced"
        );
        self.schedule = Some(schedule);
        Ok(())
    }

    fn mutate_schedule(&mut self, apply: impl FnOnce(&mut Schedule)) -> Result<(), AppError> {
        let schedule = self.schedule.as_mut().ok_or(AppError::NoSchedule)?;
        apply(schedule);
        self.store.save_schedule(schedule)
    }

    pub(crate) fn set_override(
        &mut self,
        course_code: &str,
        session_type: SessionType,
    ) -> Result<(), AppError> {
        self.mutate_schedule(|s| {
            s.overrides.insert(course_code.to_string(), session_type);
        })?;
        tracing::info!(
            course = course_code,
            kind = session_type.as_str(),
            "session type override set"
        );
        Ok(())
    }

    pub(crate) fn clear_override(&mut self, course_code: &str) -> Result<(), AppError> {
        self.mutate_schedule(|s| {
            s.overrides.remove(course_code);
        })
    }

    pub(crate) fn set_abbreviation(
        &mut self,
        course_name: &str,
        short_name: &str,
    ) -> Result<(), AppError> {
        self.mutate_schedule(|s| {
            s.abbreviations
                .insert(course_name.to_string(), short_name.to_string());
        })
    }

    pub(crate) fn clear_abbreviation(&mut self, course_name: &str) -> Result<(), AppError> {
        self.mutate_schedule(|s| {
            s.abbreviations.remove(course_name);
        })
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub(crate) fn set_language(&mut self, language: Language) -> Result<(), AppError> {
        self.store.set(LANGUAGE_KEY, language.as_str())?;
        self.language = language;
        Ok(())
    }

    /// Discard the loaded schedule; preferences are kept
    pub(crate) fn reset(&mut self) -> Result<(), AppError> {
        self.store.remove(SCHEDULE_KEY)?;
        self.schedule = None;
        self.view = View::Today;
        Ok(())
    }
}
