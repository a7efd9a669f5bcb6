//! Statistics module for habitkeep
//!
//! Derives streak history, practice totals and schedule adherence from a
//! habit's progress log.

mod habit_stats;

pub use habit_stats::HabitStats;
