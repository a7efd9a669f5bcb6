use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use habitkeep_core::{ComboDay, Config};

use super::{engine_for, load_habit, parse_date, print_json, CommandResult};

#[derive(Args)]
pub struct DashboardArgs {
    /// Habit JSON documents (repeatable)
    #[arg(long = "habit", required = true)]
    habits: Vec<PathBuf>,
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Override today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

pub fn run(args: DashboardArgs, config: &Config) -> CommandResult {
    let habits = args
        .habits
        .iter()
        .map(|path| load_habit(path))
        .collect::<Result<Vec<_>, _>>()?;
    let engine = engine_for(args.today);
    let day = args.date.unwrap_or(engine.today());

    print_json(&ComboDay::build(day, &habits, &engine), config)
}
