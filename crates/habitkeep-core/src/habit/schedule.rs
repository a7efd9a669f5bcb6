//! Weekly schedule: the set of weekdays a habit is expected on.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{parse_weekday, weekday_from_index, weekday_name};
use crate::error::ValidationError;

/// Set of weekdays on which a habit is practiced.
///
/// Stored as a seven-bit mask indexed from Sunday. Serialized as a list of
/// lowercase weekday names, e.g. `["monday", "wednesday"]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WeeklySchedule(u8);

const ALL_DAYS: u8 = 0b0111_1111;

impl WeeklySchedule {
    /// A schedule with no practice days; every day is a rest day.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All seven days.
    pub const fn every_day() -> Self {
        Self(ALL_DAYS)
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::from_days([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }

    pub fn from_days<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        days.into_iter().fold(Self::empty(), Self::with)
    }

    /// Parse a comma-separated list such as `"mon,wed,fri"`.
    ///
    /// The special value `"daily"` selects every day.
    pub fn parse_list(list: &str) -> Result<Self, ValidationError> {
        let trimmed = list.trim();
        if trimmed.eq_ignore_ascii_case("daily") {
            return Ok(Self::every_day());
        }
        trimmed
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse_weekday)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_days)
    }

    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    #[must_use]
    pub fn without(self, day: Weekday) -> Self {
        Self(self.0 & !Self::bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Whether `day` falls on a practice weekday.
    pub fn is_scheduled(&self, day: NaiveDate) -> bool {
        self.contains(day.weekday())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_every_day(&self) -> bool {
        self.0 == ALL_DAYS
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Scheduled weekdays in Sunday-first order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        (0..7u8)
            .filter_map(weekday_from_index)
            .filter(|day| self.contains(*day))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_sunday()
    }
}

impl fmt::Debug for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl TryFrom<Vec<String>> for WeeklySchedule {
    type Error = ValidationError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        names
            .iter()
            .map(|name| parse_weekday(name))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_days)
    }
}

impl From<WeeklySchedule> for Vec<String> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule
            .days()
            .map(|day| weekday_name(day).to_string())
            .collect()
    }
}
