//! Source of the evaluation instant
//!
//! Every classification takes "now" from a `Clock` so that tests and the
//! `--now` flag can pin time without branching inside the views.

use chrono::{NaiveDateTime, Utc};

use crate::utils::Timezone;

pub(crate) trait Clock {
    /// Current wall-clock time in the schedule's timezone
    fn now(&self) -> NaiveDateTime;
}

/// Real time, read in the configured timezone
#[derive(Debug, Clone, Copy)]
pub(crate) struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub(crate) fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.timezone.wall_clock(Utc::now())
    }
}

/// A pinned instant
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
