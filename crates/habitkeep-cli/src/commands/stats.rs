use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use habitkeep_core::{Config, HabitStats};

use super::{engine_for, load_habit, parse_date, print_json, CommandResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Streaks, totals and completion rate for one habit
    Show {
        /// Habit JSON document
        #[arg(long)]
        habit: PathBuf,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: StatsAction, config: &Config) -> CommandResult {
    match action {
        StatsAction::Show { habit, today } => {
            let habit = load_habit(&habit)?;
            let stats = HabitStats::compute(&habit, &engine_for(today));
            print_json(&stats, config)
        }
    }
}
