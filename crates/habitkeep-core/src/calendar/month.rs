//! Month grid for calendar views.
//!
//! Lays a month out as rows of seven cells starting on a configurable
//! weekday, each cell carrying the day's classification for the habit.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::Habit;
use crate::streak::{DayClassification, StreakEngine};

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: NaiveDate,
    /// `None` for days after today, which have not happened yet.
    pub classification: Option<DayClassification>,
    pub minutes: Option<u32>,
    pub target_met: bool,
}

/// A month of [`CalendarCell`]s arranged in weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    /// Each row has seven slots; slots outside the month are `None`.
    pub weeks: Vec<[Option<CalendarCell>; 7]>,
}

impl MonthGrid {
    /// Build the grid for `year`/`month` (1-12).
    ///
    /// # Errors
    /// Returns an error if the month does not exist.
    pub fn build(
        year: i32,
        month: u32,
        habit: &Habit,
        engine: &StreakEngine,
        week_start: Weekday,
    ) -> Result<Self, ValidationError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ValidationError::InvalidValue {
                field: "month".into(),
                message: format!("{year}-{month:02} is not a valid month"),
            }
        })?;

        let today = engine.today();
        let mut weeks = Vec::new();
        let mut week: [Option<CalendarCell>; 7] = [None; 7];

        for day in first.iter_days().take_while(|d| d.month() == month) {
            let column = column_of(day.weekday(), week_start);
            if column == 0 && week.iter().any(Option::is_some) {
                weeks.push(week);
                week = [None; 7];
            }
            week[column] = Some(CalendarCell {
                day,
                classification: (day <= today).then(|| engine.classify_day(day, habit)),
                minutes: habit.minutes_on(day),
                target_met: habit.target_met(day),
            });
        }
        weeks.push(week);

        tracing::debug!(habit = %habit.name, year, month, rows = weeks.len(), "built month grid");

        Ok(Self {
            year,
            month,
            week_start,
            weeks,
        })
    }

    /// Cells in day order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten().flatten()
    }

    pub fn cell(&self, day: NaiveDate) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.day == day)
    }
}

fn column_of(weekday: Weekday, week_start: Weekday) -> usize {
    let offset = 7 + weekday.num_days_from_sunday() - week_start.num_days_from_sunday();
    (offset % 7) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{HabitKind, WeeklySchedule};

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn reading() -> Habit {
        let mut habit = Habit::new("Read", HabitKind::Reading, WeeklySchedule::every_day());
        for d in [1, 2, 3] {
            habit.record_session(jan(d), 25);
        }
        habit
    }

    #[test]
    fn sunday_start_offsets_first_monday() {
        let engine = StreakEngine::new(jan(3));
        let grid = MonthGrid::build(2024, 1, &reading(), &engine, Weekday::Sun).unwrap();

        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks[0][0].is_none());
        assert_eq!(grid.weeks[0][1].unwrap().day, jan(1));
        assert_eq!(grid.cells().count(), 31);
    }

    #[test]
    fn monday_start_fills_first_row() {
        let engine = StreakEngine::new(jan(3));
        let grid = MonthGrid::build(2024, 1, &reading(), &engine, Weekday::Mon).unwrap();
        assert!(grid.weeks[0].iter().all(Option::is_some));
        assert_eq!(grid.weeks[4][2].unwrap().day, jan(31));
        assert!(grid.weeks[4][3].is_none());
    }

    #[test]
    fn cells_carry_classification_up_to_today() {
        let engine = StreakEngine::new(jan(3));
        let grid = MonthGrid::build(2024, 1, &reading(), &engine, Weekday::Sun).unwrap();

        let first = grid.cell(jan(1)).unwrap();
        assert_eq!(first.classification, Some(DayClassification::StreakStart));
        assert_eq!(first.minutes, Some(25));
        assert!(first.target_met);

        let today = grid.cell(jan(3)).unwrap();
        assert_eq!(today.classification, Some(DayClassification::TodayStreak));

        let future = grid.cell(jan(4)).unwrap();
        assert_eq!(future.classification, None);
        assert!(!future.target_met);
    }

    #[test]
    fn rejects_invalid_month() {
        let engine = StreakEngine::new(jan(3));
        let result = MonthGrid::build(2024, 13, &reading(), &engine, Weekday::Sun);
        assert!(matches!(result, Err(ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn column_of_wraps_around_week_start() {
        assert_eq!(column_of(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(column_of(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(column_of(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(column_of(Weekday::Sat, Weekday::Sat), 0);
    }
}
