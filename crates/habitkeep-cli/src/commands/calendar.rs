use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use habitkeep_core::calendar::parse_weekday;
use habitkeep_core::{Config, MonthGrid};

use super::{engine_for, load_habit, parse_date, print_json, CommandResult};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Month grid of classified days
    Month {
        /// Habit JSON document
        #[arg(long)]
        habit: PathBuf,
        /// Month as YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
        /// First column of the grid (e.g. "mon"), defaults to config
        #[arg(long)]
        week_start: Option<String>,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

fn parse_month(s: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{s}': expected YYYY-MM"))?;
    Ok((first.year(), first.month()))
}

pub fn run(action: CalendarAction, config: &Config) -> CommandResult {
    match action {
        CalendarAction::Month {
            habit,
            month,
            week_start,
            today,
        } => {
            let habit = load_habit(&habit)?;
            let engine = engine_for(today);
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (engine.today().year(), engine.today().month()),
            };
            let week_start = match week_start {
                Some(name) => parse_weekday(&name)?,
                None => config.calendar.week_starts_on,
            };

            let grid = MonthGrid::build(year, month, &habit, &engine, week_start)?;
            print_json(&grid, config)
        }
    }
}
