//! Per-habit streak and practice statistics.
//!
//! Everything is derived from the progress log up to the engine's today;
//! entries dated in the future are ignored.

use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::streak::{StreakDescriptor, StreakEngine};

/// Summary statistics for one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    pub habit_id: String,
    pub name: String,
    /// Window containing today, `NONE` if the last streak is broken
    pub current_streak: StreakDescriptor,
    /// Longest window by logged days; the most recent wins a tie
    pub longest_streak: StreakDescriptor,
    /// All windows, oldest first
    pub streaks: Vec<StreakDescriptor>,
    pub logged_days: usize,
    pub total_minutes: u64,
    pub average_minutes: f64,
    /// Logged days whose minutes reached the target
    pub target_met_days: usize,
    /// Scheduled days from the first log entry through today
    pub scheduled_days: usize,
    /// Scheduled days in that range that were logged
    pub completed_scheduled_days: usize,
    /// `completed_scheduled_days / scheduled_days`, 0.0 when nothing was due
    pub completion_rate: f64,
}

impl HabitStats {
    pub fn compute(habit: &Habit, engine: &StreakEngine) -> Self {
        let today = engine.today();
        let streaks = engine.streaks(habit);
        let current_streak = engine.compute_streak(today, habit);
        let longest_streak = streaks
            .iter()
            .copied()
            .max_by_key(|s| s.length)
            .unwrap_or_default();

        let past: Vec<_> = habit
            .progress
            .entries()
            .take_while(|e| e.day <= today)
            .collect();
        let logged_days = past.len();
        let total_minutes: u64 = past.iter().map(|e| u64::from(e.minutes)).sum();
        let average_minutes = if logged_days == 0 {
            0.0
        } else {
            total_minutes as f64 / logged_days as f64
        };
        let target_met_days = past
            .iter()
            .filter(|e| e.minutes >= habit.target_minutes)
            .count();

        let (scheduled_days, completed_scheduled_days) = match past.first() {
            Some(first) => first
                .day
                .iter_days()
                .take_while(|d| *d <= today)
                .filter(|d| habit.schedule.is_scheduled(*d))
                .fold((0, 0), |(due, done), d| {
                    (due + 1, done + usize::from(habit.progress.is_logged(d)))
                }),
            None => (0, 0),
        };
        let completion_rate = if scheduled_days == 0 {
            0.0
        } else {
            completed_scheduled_days as f64 / scheduled_days as f64
        };

        Self {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            current_streak,
            longest_streak,
            streaks,
            logged_days,
            total_minutes,
            average_minutes,
            target_met_days,
            scheduled_days,
            completed_scheduled_days,
            completion_rate,
        }
    }
}
