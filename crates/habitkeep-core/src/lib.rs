//! # habitkeep Core Library
//!
//! This library provides the core logic for the habitkeep habit tracker.
//! All operations are available through the standalone CLI binary; any
//! graphical front end is expected to be a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure functions over a habit's weekly schedule and
//!   progress log, anchored to an explicitly supplied "today"
//! - **Habit model**: schedule, progress log and daily target
//! - **Views**: month calendar grids, a combined dashboard day and
//!   per-habit statistics built on the engine
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`StreakEngine`]: streak windows and day classification
//! - [`Habit`]: the tracked activity
//! - [`MonthGrid`]: calendar month of classified days
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod dashboard;
pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod streak;

pub use calendar::{CalendarCell, MonthGrid};
pub use dashboard::{ComboDay, HabitDay};
pub use error::{ConfigError, CoreError, ValidationError};
pub use habit::{Habit, HabitKind, HabitView, ProgressEntry, ProgressLog, WeeklySchedule};
pub use stats::HabitStats;
pub use storage::Config;
pub use streak::{DayClassification, StreakDescriptor, StreakEngine};
