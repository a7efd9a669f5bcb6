//! Progress log: completed practice keyed by calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ValidationError;

/// A single day of recorded practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub day: NaiveDate,
    pub minutes: u32,
}

/// Completed practice days for one habit, at most one entry per day.
/// Every entry holds at least one minute.
///
/// Built from raw entries through [`ProgressLog::from_entries`], which
/// rejects duplicate days and zero-minute entries. Serialized as a list of [`ProgressEntry`] in
/// ascending day order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProgressEntry>", into = "Vec<ProgressEntry>")]
pub struct ProgressLog {
    days: BTreeMap<NaiveDate, u32>,
}

impl ProgressLog {
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Build a log from entries in any order.
    ///
    /// # Errors
    /// Returns [`ValidationError::DuplicateEntry`] if two entries share a day,
    /// or [`ValidationError::InvalidValue`] for an entry with zero minutes.
    pub fn from_entries<I>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = ProgressEntry>,
    {
        let mut days = BTreeMap::new();
        for entry in entries {
            if entry.minutes == 0 {
                return Err(ValidationError::InvalidValue {
                    field: "progress.minutes".to_string(),
                    message: format!("entry for {} has no minutes", entry.day),
                });
            }
            if days.insert(entry.day, entry.minutes).is_some() {
                return Err(ValidationError::DuplicateEntry(entry.day));
            }
        }
        Ok(Self { days })
    }

    pub fn is_logged(&self, day: NaiveDate) -> bool {
        self.days.contains_key(&day)
    }

    pub fn minutes_on(&self, day: NaiveDate) -> Option<u32> {
        self.days.get(&day).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in ascending day order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = ProgressEntry> + '_ {
        self.days
            .iter()
            .map(|(&day, &minutes)| ProgressEntry { day, minutes })
    }

    /// Logged days in ascending order.
    pub fn days(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn total_minutes(&self) -> u64 {
        self.days.values().map(|&m| u64::from(m)).sum()
    }

    /// Add a session's minutes to the day's entry, creating it if needed.
    /// Returns the day's new total. An empty session leaves the log as is.
    pub fn record(&mut self, day: NaiveDate, minutes: u32) -> u32 {
        if minutes == 0 {
            return self.minutes_on(day).unwrap_or(0);
        }
        let total = self.days.entry(day).or_insert(0);
        *total = total.saturating_add(minutes);
        *total
    }

    /// Replace the day's entry. Zero minutes clears it.
    pub fn set(&mut self, day: NaiveDate, minutes: u32) {
        if minutes == 0 {
            self.days.remove(&day);
        } else {
            self.days.insert(day, minutes);
        }
    }

    pub fn remove(&mut self, day: NaiveDate) -> Option<u32> {
        self.days.remove(&day)
    }
}

impl TryFrom<Vec<ProgressEntry>> for ProgressLog {
    type Error = ValidationError;

    fn try_from(entries: Vec<ProgressEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<ProgressLog> for Vec<ProgressEntry> {
    fn from(log: ProgressLog) -> Self {
        log.entries().collect()
    }
}
