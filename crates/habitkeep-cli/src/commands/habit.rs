//! Habit document commands.
//!
//! These commands never write files; they print the new or updated habit
//! document so the caller decides where it lives.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use habitkeep_core::{Config, Habit, HabitKind, WeeklySchedule};

use super::{load_habit, parse_date, print_json, CommandResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Print a new habit document
    New {
        /// Habit name
        name: String,
        /// reading, journaling, meditating, fasting or custom
        #[arg(long)]
        kind: Option<String>,
        /// Scheduled weekdays, e.g. "mon,wed,fri" or "daily"
        #[arg(long)]
        days: Option<String>,
        /// Daily target in minutes
        #[arg(long)]
        target: Option<u32>,
    },
    /// Record a practice session and print the updated document
    Log {
        /// Habit JSON document
        #[arg(long)]
        habit: PathBuf,
        /// Day of the session (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Minutes practiced, at least 1
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        minutes: u32,
    },
    /// Validate a habit document and print it normalized
    Show {
        /// Habit JSON document
        #[arg(long)]
        habit: PathBuf,
    },
}

pub fn run(action: HabitAction, config: &Config) -> CommandResult {
    match action {
        HabitAction::New {
            name,
            kind,
            days,
            target,
        } => {
            let kind = match kind {
                Some(k) => HabitKind::parse(&k).ok_or_else(|| format!("unknown habit kind: {k}"))?,
                None => HabitKind::Custom,
            };
            let schedule = match days {
                Some(list) => WeeklySchedule::parse_list(&list)?,
                None => config.defaults.schedule,
            };
            let target = target.unwrap_or(match kind {
                HabitKind::Custom => config.defaults.target_minutes,
                other => other.default_target_minutes(),
            });

            let habit = Habit::new(name, kind, schedule).with_target(target);
            habit.validate()?;
            print_json(&habit, config)
        }
        HabitAction::Log {
            habit,
            date,
            minutes,
        } => {
            let mut habit = load_habit(&habit)?;
            let day = date.unwrap_or_else(habitkeep_core::calendar::local_today);
            habit.record_session(day, minutes);
            print_json(&habit, config)
        }
        HabitAction::Show { habit } => print_json(&load_habit(&habit)?, config),
    }
}
