//! Layout calculator: event timestamps to grid-relative pixel geometry.

use serde::Serialize;

use crate::models::event::Event;
use crate::utils::date::minutes_from_midnight;

/// Vertical scale of the day column: one hour row is 60 px tall, so one
/// minute maps to exactly one pixel.
pub const PIXELS_PER_HOUR: f32 = 60.0;
pub const PIXELS_PER_MINUTE: f32 = PIXELS_PER_HOUR / 60.0;

/// Grid-relative geometry of one rendered event block.
///
/// `top`/`height` are pixels within the day column; `left`/`width` are
/// percentages of the column, supporting side-by-side placement of
/// concurrent events when the caller assigns distinct columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
}

/// Geometry for `event` rendered into column `column_index` of its day.
///
/// `top` is the start time's offset from midnight and `height` the event
/// duration, both in minutes-as-pixels. A non-positive duration yields a
/// degenerate block rather than an error; the caller owns the
/// `end > start` invariant.
///
/// Column packing is the caller's concern: this crate never derives
/// `column_index` from overlap analysis, and the conventional single-column
/// call is `position_of(event, 100.0, 0)`.
pub fn position_of(event: &Event, column_width_percent: f32, column_index: usize) -> EventGeometry {
    let start_minutes = minutes_from_midnight(event.start.time());
    let end_minutes = minutes_from_midnight(event.end.time());

    EventGeometry {
        top: start_minutes as f32 * PIXELS_PER_MINUTE,
        height: (end_minutes - start_minutes) as f32 * PIXELS_PER_MINUTE,
        left: column_index as f32 * column_width_percent,
        width: column_width_percent,
    }
}
