use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single calendar day relative to today and to the streak the
/// day belongs to.
///
/// An *active* streak is one whose window ends today; an *inactive* streak
/// ended on an earlier day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayClassification {
    /// Today, logged, continuing a streak of more than one practice day
    TodayStreak,
    /// Today, logged, first practice day of its streak
    TodayLogged,
    /// Today is a rest day inside an active streak
    TodayRestStreak,
    /// Today is a rest day with no streak
    TodayRest,
    /// Today is scheduled and not yet logged, but a streak is running into it
    TodayInStreak,
    /// Today is scheduled, not logged, no streak
    Today,
    /// First practice day of the active streak
    StreakStart,
    /// Logged day inside the active streak
    Streak,
    /// Rest day inside the active streak
    RestBetweenStreak,
    /// First practice day of a broken streak of more than one day
    InactiveStreakStart,
    /// Isolated practice day whose streak has ended
    LoggedDay,
    /// Last practice day of a broken streak
    InactiveStreakEnd,
    /// Logged day inside a broken streak
    InactiveStreak,
    /// Rest day inside a broken streak
    RestBetweenInactiveStreak,
    /// Unscheduled day outside any streak
    Rest,
    /// Scheduled day outside any streak
    Normal,
}

impl DayClassification {
    pub const ALL: [DayClassification; 16] = [
        DayClassification::TodayStreak,
        DayClassification::TodayLogged,
        DayClassification::TodayRestStreak,
        DayClassification::TodayRest,
        DayClassification::TodayInStreak,
        DayClassification::Today,
        DayClassification::StreakStart,
        DayClassification::Streak,
        DayClassification::RestBetweenStreak,
        DayClassification::InactiveStreakStart,
        DayClassification::LoggedDay,
        DayClassification::InactiveStreakEnd,
        DayClassification::InactiveStreak,
        DayClassification::RestBetweenInactiveStreak,
        DayClassification::Rest,
        DayClassification::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayClassification::TodayStreak => "TODAY_STREAK",
            DayClassification::TodayLogged => "TODAY_LOGGED",
            DayClassification::TodayRestStreak => "TODAY_REST_STREAK",
            DayClassification::TodayRest => "TODAY_REST",
            DayClassification::TodayInStreak => "TODAY_IN_STREAK",
            DayClassification::Today => "TODAY",
            DayClassification::StreakStart => "STREAK_START",
            DayClassification::Streak => "STREAK",
            DayClassification::RestBetweenStreak => "REST_BETWEEN_STREAK",
            DayClassification::InactiveStreakStart => "INACTIVE_STREAK_START",
            DayClassification::LoggedDay => "LOGGED_DAY",
            DayClassification::InactiveStreakEnd => "INACTIVE_STREAK_END",
            DayClassification::InactiveStreak => "INACTIVE_STREAK",
            DayClassification::RestBetweenInactiveStreak => "REST_BETWEEN_INACTIVE_STREAK",
            DayClassification::Rest => "REST",
            DayClassification::Normal => "NORMAL",
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(
            self,
            DayClassification::TodayStreak
                | DayClassification::TodayLogged
                | DayClassification::TodayRestStreak
                | DayClassification::TodayRest
                | DayClassification::TodayInStreak
                | DayClassification::Today
        )
    }

    /// Whether the day belongs to the streak that is still being built.
    pub fn is_active_streak(&self) -> bool {
        matches!(
            self,
            DayClassification::TodayStreak
                | DayClassification::TodayLogged
                | DayClassification::TodayRestStreak
                | DayClassification::TodayInStreak
                | DayClassification::StreakStart
                | DayClassification::Streak
                | DayClassification::RestBetweenStreak
        )
    }

    /// Whether the day belongs to a streak that has already ended.
    pub fn is_inactive_streak(&self) -> bool {
        matches!(
            self,
            DayClassification::InactiveStreakStart
                | DayClassification::LoggedDay
                | DayClassification::InactiveStreakEnd
                | DayClassification::InactiveStreak
                | DayClassification::RestBetweenInactiveStreak
        )
    }
}

impl fmt::Display for DayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
