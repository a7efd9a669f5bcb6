//! Subcommand implementations. Every command prints JSON on stdout.

pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod day;
pub mod habit;
pub mod stats;

use std::path::Path;

use chrono::NaiveDate;
use habitkeep_core::calendar::parse_day_key;
use habitkeep_core::{Config, Habit, StreakEngine, ValidationError};
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    parse_day_key(s)
}

/// Engine anchored to `--today` when given, otherwise the local date.
pub fn engine_for(today: Option<NaiveDate>) -> StreakEngine {
    today.map_or_else(StreakEngine::local, StreakEngine::new)
}

pub fn load_habit(path: &Path) -> Result<Habit, Box<dyn std::error::Error>> {
    Habit::load(path).map_err(|e| format!("{}: {e}", path.display()).into())
}

/// Print as JSON, pretty or compact per `output.pretty`.
pub fn print_json<T: Serialize>(value: &T, config: &Config) -> CommandResult {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
