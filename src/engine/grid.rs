//! Time grid model: which days and hour slots a view renders.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::view::CalendarView;
use crate::utils::date::{first_of_month, week_start};

/// Number of cells in a month grid: 6 full Sunday-Saturday weeks.
pub const MONTH_GRID_CELLS: usize = 42;

/// The ordered set of calendar dates a view renders for `anchor`.
///
/// * `Day`: just `[anchor]`.
/// * `Week`: 7 consecutive dates from the Sunday on or before `anchor`.
/// * `Month`: exactly [`MONTH_GRID_CELLS`] dates; the first of the month
///   lands at index `weekday(first)` so the grid is always a rectangular
///   six-week block padded with trailing previous-month and leading
///   next-month days.
pub fn days_to_display(anchor: NaiveDate, view: CalendarView) -> Vec<NaiveDate> {
    match view {
        CalendarView::Day => vec![anchor],
        CalendarView::Week => {
            let start = week_start(anchor);
            (0..7).map(|offset| start + Duration::days(offset)).collect()
        }
        CalendarView::Month => {
            let first = first_of_month(anchor);
            let lead = first.weekday().num_days_from_sunday() as i64;
            let grid_start = first - Duration::days(lead);
            (0..MONTH_GRID_CELLS as i64)
                .map(|offset| grid_start + Duration::days(offset))
                .collect()
        }
    }
}

/// Hour labels of a day column, always `0..=23` regardless of view.
pub fn time_slots() -> Vec<u32> {
    (0..24).collect()
}
