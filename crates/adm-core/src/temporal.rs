//! Temporal value types and calendar validation.
//!
//! Dates and times are stored as `chrono` naive values, which are valid by
//! construction. The helpers here turn raw components into those values and
//! report which component was wrong. Milliseconds and time zones are not
//! modelled.

use crate::error::ValueError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Smallest year accepted for dates.
pub const MIN_YEAR: i32 = 1;

/// Largest year accepted for dates; keeps `%Y` at four digits.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Validate and build a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValueError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValueError::calendar(
            "year",
            year,
            format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
        ));
    }
    if !(1..=12).contains(&month) {
        return Err(ValueError::calendar("month", month, "must be between 1 and 12"));
    }
    let last_day = days_in_month(year, month);
    if day == 0 || day > last_day {
        return Err(ValueError::calendar(
            "day",
            day,
            format!("{year:04}-{month:02} has {last_day} days"),
        ));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ValueError::calendar("day", day, "not representable"))
}

/// Validate and build a time of day.
pub fn time(hour: u32, minute: u32, second: u32) -> Result<NaiveTime, ValueError> {
    if hour > 23 {
        return Err(ValueError::calendar("hour", hour, "must be between 0 and 23"));
    }
    if minute > 59 {
        return Err(ValueError::calendar("minute", minute, "must be between 0 and 59"));
    }
    if second > 59 {
        return Err(ValueError::calendar("second", second, "must be between 0 and 59"));
    }
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| ValueError::calendar("second", second, "not representable"))
}

/// Validate and build a date with time of day.
pub fn datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime, ValueError> {
    Ok(date(year, month, day)?.and_time(time(hour, minute, second)?))
}

/// Full duration. Components are raw counts and are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonthDuration {
    pub years: u32,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTimeDuration {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Interval between two datetimes. Endpoint order is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
