// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// The Sunday on or before the given date (week index 0).
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Number of calendar days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).unwrap()
    };
    (next_month - first).num_days() as u32
}

/// First calendar day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists
    date.with_day(1).unwrap()
}

/// Minutes elapsed since midnight.
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}
