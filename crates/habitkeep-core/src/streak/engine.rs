//! Streak window computation and day classification.
//!
//! A day continues a streak when it is logged or is a rest day (not in the
//! weekly schedule). Only a scheduled day without a log entry breaks a
//! streak, and today never does because it is still in progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayClassification;
use crate::calendar::local_today;
use crate::habit::HabitView;

/// The streak containing a queried day.
///
/// `length` counts logged days only; rest days inside the window are
/// tolerated but not counted. `start` and `end` are `None` exactly when
/// `length` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreakDescriptor {
    pub length: u32,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl StreakDescriptor {
    /// No streak.
    pub const NONE: StreakDescriptor = StreakDescriptor {
        length: 0,
        start: None,
        end: None,
    };

    pub fn is_streak(&self) -> bool {
        self.length > 0
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            _ => false,
        }
    }

    /// Whether the window is still open, i.e. ends on `today`.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.is_streak() && self.end == Some(today)
    }

    /// Number of calendar days spanned, rest days included.
    pub fn span_days(&self) -> u32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end - start).num_days() as u32 + 1,
            _ => 0,
        }
    }
}

impl Default for StreakDescriptor {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pure streak calculator anchored to a fixed "today".
///
/// The engine holds no habit state; every call reads the habit it is given
/// and returns a fresh value. Construct it with an explicit date in tests and
/// with [`StreakEngine::local`] in production code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakEngine {
    today: NaiveDate,
}

impl StreakEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Engine anchored to the local calendar day.
    pub fn local() -> Self {
        Self::new(local_today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Find the streak window containing `day`.
    ///
    /// The window starts at the first logged day of the contiguous run and
    /// ends today when the run reaches today, otherwise at the run's last
    /// logged day. Days outside that window get [`StreakDescriptor::NONE`].
    pub fn compute_streak<H: HabitView + ?Sized>(
        &self,
        day: NaiveDate,
        habit: &H,
    ) -> StreakDescriptor {
        let schedule = habit.schedule();
        let progress = habit.progress();

        if progress.is_empty() || schedule.is_empty() {
            return StreakDescriptor::NONE;
        }

        let today = self.today;
        let continues =
            |d: NaiveDate| d == today || !schedule.is_scheduled(d) || progress.is_logged(d);

        if !continues(day) {
            tracing::trace!(%day, "missed scheduled day, no streak");
            return StreakDescriptor::NONE;
        }

        let mut length = 0u32;
        let mut first_logged: Option<NaiveDate> = None;
        let mut last_logged: Option<NaiveDate> = None;
        let mut reaches_today = false;

        let mut cursor = Some(day);
        while let Some(d) = cursor.filter(|d| continues(*d)) {
            if progress.is_logged(d) {
                length += 1;
                first_logged = Some(d);
                last_logged.get_or_insert(d);
            }
            reaches_today |= d == today;
            cursor = d.pred_opt();
        }

        let mut cursor = day.succ_opt();
        while let Some(d) = cursor.filter(|d| continues(*d)) {
            if progress.is_logged(d) {
                length += 1;
                last_logged = Some(d);
                first_logged.get_or_insert(d);
            }
            reaches_today |= d == today;
            cursor = d.succ_opt();
        }

        let (Some(start), Some(last)) = (first_logged, last_logged) else {
            return StreakDescriptor::NONE;
        };
        let end = if reaches_today { today } else { last };

        if start > end || end > today || day < start || day > end {
            tracing::trace!(%day, %start, %end, "day outside streak window");
            return StreakDescriptor::NONE;
        }

        StreakDescriptor {
            length,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Classify `day` for display.
    pub fn classify_day<H: HabitView + ?Sized>(
        &self,
        day: NaiveDate,
        habit: &H,
    ) -> DayClassification {
        let streak = self.compute_streak(day, habit);
        self.classify_with(day, habit, &streak)
    }

    /// Classify `day` using an already computed window for it.
    pub(crate) fn classify_with<H: HabitView + ?Sized>(
        &self,
        day: NaiveDate,
        habit: &H,
        streak: &StreakDescriptor,
    ) -> DayClassification {
        let scheduled = habit.schedule().is_scheduled(day);
        let logged = habit.progress().is_logged(day);
        let length = streak.length;
        let today = self.today;

        if day == today {
            return if length > 1 && logged {
                DayClassification::TodayStreak
            } else if logged {
                DayClassification::TodayLogged
            } else if !scheduled && length > 0 {
                DayClassification::TodayRestStreak
            } else if !scheduled {
                DayClassification::TodayRest
            } else if length > 0 {
                DayClassification::TodayInStreak
            } else {
                DayClassification::Today
            };
        }

        let is_start = streak.start == Some(day);
        let is_end = streak.end == Some(day);
        let active = streak.end == Some(today);

        if length > 0 && active {
            if is_start {
                return DayClassification::StreakStart;
            }
            if logged {
                return DayClassification::Streak;
            }
            if day < today {
                return DayClassification::RestBetweenStreak;
            }
        }

        if length > 1 && is_start {
            DayClassification::InactiveStreakStart
        } else if length > 0 && is_start {
            DayClassification::LoggedDay
        } else if length > 0 && is_end {
            DayClassification::InactiveStreakEnd
        } else if length > 0 && logged {
            DayClassification::InactiveStreak
        } else if length > 0 && day < today {
            DayClassification::RestBetweenInactiveStreak
        } else if !scheduled {
            DayClassification::Rest
        } else {
            DayClassification::Normal
        }
    }

    /// Every streak window with at least one logged day up to today, oldest
    /// first.
    pub fn streaks<H: HabitView + ?Sized>(&self, habit: &H) -> Vec<StreakDescriptor> {
        let mut windows: Vec<StreakDescriptor> = Vec::new();
        for day in habit.progress().days().take_while(|d| *d <= self.today) {
            if windows.last().is_some_and(|w| w.contains(day)) {
                continue;
            }
            let window = self.compute_streak(day, habit);
            if window.is_streak() {
                windows.push(window);
            }
        }
        windows
    }
}
