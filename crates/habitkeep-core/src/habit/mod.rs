//! Habit model: identity, daily target, weekly schedule and progress log.
//!
//! The streak engine only ever reads a habit through [`HabitView`], so
//! callers can hand it a full [`Habit`], a borrowed one, or `None`.

mod progress;
mod schedule;

pub use progress::{ProgressEntry, ProgressLog};
pub use schedule::WeeklySchedule;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ValidationError};

/// Kind of habit, used to pick a sensible default target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    Reading,
    Journaling,
    Meditating,
    /// Time-restricted eating; the target is the fasting window.
    Fasting,
    Custom,
}

impl HabitKind {
    /// Default daily target in minutes.
    pub fn default_target_minutes(&self) -> u32 {
        match self {
            HabitKind::Reading => 20,
            HabitKind::Journaling => 10,
            HabitKind::Meditating => 10,
            HabitKind::Fasting => 16 * 60,
            HabitKind::Custom => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitKind::Reading => "Reading",
            HabitKind::Journaling => "Journaling",
            HabitKind::Meditating => "Meditating",
            HabitKind::Fasting => "Fasting",
            HabitKind::Custom => "Custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reading" | "read" => Some(HabitKind::Reading),
            "journaling" | "journal" => Some(HabitKind::Journaling),
            "meditating" | "meditate" | "meditation" => Some(HabitKind::Meditating),
            "fasting" | "fast" => Some(HabitKind::Fasting),
            "custom" => Some(HabitKind::Custom),
            _ => None,
        }
    }
}

impl Default for HabitKind {
    fn default() -> Self {
        HabitKind::Custom
    }
}

/// Read-only view of the two inputs the streak engine needs.
pub trait HabitView {
    fn schedule(&self) -> &WeeklySchedule;
    fn progress(&self) -> &ProgressLog;
}

static NO_SCHEDULE: WeeklySchedule = WeeklySchedule::empty();
static NO_PROGRESS: ProgressLog = ProgressLog::new();

impl<T: HabitView + ?Sized> HabitView for &T {
    fn schedule(&self) -> &WeeklySchedule {
        (**self).schedule()
    }

    fn progress(&self) -> &ProgressLog {
        (**self).progress()
    }
}

/// A missing habit reads as an empty schedule with an empty log.
impl<T: HabitView> HabitView for Option<T> {
    fn schedule(&self) -> &WeeklySchedule {
        self.as_ref().map_or(&NO_SCHEDULE, HabitView::schedule)
    }

    fn progress(&self) -> &ProgressLog {
        self.as_ref().map_or(&NO_PROGRESS, HabitView::progress)
    }
}

/// A user-defined recurring activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: HabitKind,
    pub target_minutes: u32,
    pub schedule: WeeklySchedule,
    #[serde(default)]
    pub progress: ProgressLog,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a habit with a fresh id and the kind's default target.
    pub fn new(name: impl Into<String>, kind: HabitKind, schedule: WeeklySchedule) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            target_minutes: kind.default_target_minutes(),
            schedule,
            progress: ProgressLog::new(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, minutes: u32) -> Self {
        self.target_minutes = minutes;
        self
    }

    /// Parse and validate a habit document.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, the progress log contains
    /// duplicate days, or the habit fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let habit: Habit = serde_json::from_str(json)?;
        habit.validate()?;
        tracing::debug!(
            habit = %habit.name,
            entries = habit.progress.len(),
            scheduled_days = habit.schedule.len(),
            "loaded habit"
        );
        Ok(habit)
    }

    /// Read a habit document from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not hold a valid habit.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "habit name must not be empty".into(),
            });
        }
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "id".into(),
                message: "habit id must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Record a timed session. Sessions on the same day accumulate.
    /// Returns the day's total minutes.
    pub fn record_session(&mut self, day: NaiveDate, minutes: u32) -> u32 {
        let total = self.progress.record(day, minutes);
        tracing::debug!(habit = %self.name, %day, minutes, total, "recorded session");
        total
    }

    pub fn remove_entry(&mut self, day: NaiveDate) -> Option<u32> {
        self.progress.remove(day)
    }

    pub fn minutes_on(&self, day: NaiveDate) -> Option<u32> {
        self.progress.minutes_on(day)
    }

    /// Whether the day's practice reached the daily target.
    pub fn target_met(&self, day: NaiveDate) -> bool {
        self.minutes_on(day)
            .is_some_and(|minutes| minutes >= self.target_minutes)
    }
}

impl HabitView for Habit {
    fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    fn progress(&self) -> &ProgressLog {
        &self.progress
    }
}
