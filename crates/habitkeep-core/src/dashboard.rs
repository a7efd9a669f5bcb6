//! Combined view of every habit on a single day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::streak::{DayClassification, StreakDescriptor, StreakEngine};

/// One habit's state on the dashboard day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDay {
    pub habit_id: String,
    pub name: String,
    pub scheduled: bool,
    pub minutes: Option<u32>,
    pub target_minutes: u32,
    pub classification: DayClassification,
    pub streak: StreakDescriptor,
}

impl HabitDay {
    pub fn is_logged(&self) -> bool {
        self.minutes.is_some()
    }
}

/// All habits on one day, with completion counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDay {
    pub day: NaiveDate,
    pub habits: Vec<HabitDay>,
    pub scheduled_count: usize,
    pub logged_count: usize,
    /// Every scheduled habit has been logged. Vacuously true on a day with
    /// nothing scheduled.
    pub all_done: bool,
}

impl ComboDay {
    pub fn build(day: NaiveDate, habits: &[Habit], engine: &StreakEngine) -> Self {
        let habits: Vec<HabitDay> = habits
            .iter()
            .map(|habit| {
                let streak = engine.compute_streak(day, habit);
                HabitDay {
                    habit_id: habit.id.clone(),
                    name: habit.name.clone(),
                    scheduled: habit.schedule.is_scheduled(day),
                    minutes: habit.minutes_on(day),
                    target_minutes: habit.target_minutes,
                    classification: engine.classify_with(day, habit, &streak),
                    streak,
                }
            })
            .collect();

        let scheduled_count = habits.iter().filter(|h| h.scheduled).count();
        let logged_count = habits.iter().filter(|h| h.is_logged()).count();
        let all_done = habits.iter().all(|h| !h.scheduled || h.is_logged());

        Self {
            day,
            habits,
            scheduled_count,
            logged_count,
            all_done,
        }
    }

    /// Longest active streak among the day's habits.
    pub fn best_active_streak(&self, today: NaiveDate) -> Option<&HabitDay> {
        self.habits
            .iter()
            .filter(|h| h.streak.is_active(today))
            .max_by_key(|h| h.streak.length)
    }
}
