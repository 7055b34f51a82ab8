//! Event locator: which events fall on a date, and which occupy an hour slot.

use chrono::{NaiveDate, Timelike};

use crate::models::event::Event;

/// Events whose start falls on `date`, ignoring time of day.
///
/// Always returns a (possibly empty) vector; input order is preserved.
pub fn events_for_date<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.start.date() == date)
        .collect()
}

/// Events that start on `date` and occupy the slot beginning at `hour`.
///
/// An event occupies `hour` when it starts in that hour, or spans across
/// it. An event whose end lands exactly on an hour boundary does not
/// occupy the boundary hour, and an event never matches outside its start
/// day even if it runs past midnight.
pub fn events_for_slot<'a>(events: &'a [Event], date: NaiveDate, hour: u32) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.start.date() == date && occupies_hour(event, hour))
        .collect()
}

fn occupies_hour(event: &Event, hour: u32) -> bool {
    let start_hour = event.start.hour();
    let end_hour = event.end.hour();
    start_hour == hour || (start_hour < hour && end_hour > hour)
}
