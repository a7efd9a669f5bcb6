use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;

use habitkeep_core::{Config, DayClassification, StreakDescriptor};

use super::{engine_for, load_habit, parse_date, print_json, CommandResult};

#[derive(Args)]
pub struct DayArgs {
    /// Habit JSON document
    #[arg(long)]
    habit: PathBuf,
    /// Day to inspect (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Override today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum DayAction {
    /// Classify a day for display
    Classify(DayArgs),
    /// Show the streak window containing a day
    Streak(DayArgs),
}

#[derive(Serialize)]
struct DayReport {
    day: NaiveDate,
    today: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<DayClassification>,
    streak: StreakDescriptor,
}

pub fn run(action: DayAction, config: &Config) -> CommandResult {
    let (args, classify) = match action {
        DayAction::Classify(args) => (args, true),
        DayAction::Streak(args) => (args, false),
    };

    let habit = load_habit(&args.habit)?;
    let engine = engine_for(args.today);
    let day = args.date.unwrap_or(engine.today());

    let report = DayReport {
        day,
        today: engine.today(),
        classification: classify.then(|| engine.classify_day(day, &habit)),
        streak: engine.compute_streak(day, &habit),
    };
    print_json(&report, config)
}
