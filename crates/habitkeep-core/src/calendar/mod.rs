//! Calendar date helpers and month views.
//!
//! All engine inputs are day-granular [`NaiveDate`] values. Helpers here
//! convert timestamps into day keys without touching the caller's value.

pub mod month;

pub use month::{CalendarCell, MonthGrid};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Weekday};

use crate::error::ValidationError;

/// Format used for day keys in JSON documents and on the command line.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Weekdays indexed the way most calendar UIs count them: 0 = Sunday.
const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Map a Sunday-based index (0..=6) to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(index as usize).copied()
}

/// Sunday-based index (0..=6) of a weekday.
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Parse a weekday name such as `"mon"`, `"Monday"` or `"SUN"`.
pub fn parse_weekday(name: &str) -> Result<Weekday, ValidationError> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_| ValidationError::UnknownWeekday(name.to_string()))
}

/// Lowercase full name of a weekday, used when serializing schedules.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// Strip the time-of-day from a timestamp, returning the calendar day in the
/// timestamp's own zone.
pub fn normalize_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// The current calendar day in the local zone.
pub fn local_today() -> NaiveDate {
    normalize_day(&Local::now())
}

/// Render a day as a `YYYY-MM-DD` key.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_day_key(key: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(key.trim(), DAY_KEY_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(key.to_string()))
}
