//! The time-grid engine.
//!
//! Pure functions over caller-owned data: the caller supplies events,
//! services, an anchor date and a view; the engine yields the day set,
//! the hour slots, per-cell occupancy and per-event geometry, and on a
//! completed drag gesture a patched event for the caller to persist.
//! Nothing here mutates the input slices or performs I/O.

pub mod drag;
pub mod grid;
pub mod layout;
pub mod locator;

pub use drag::{reschedule, DragController, DragState, DropCell};
pub use grid::{days_to_display, time_slots};
pub use layout::{position_of, EventGeometry};
pub use locator::{events_for_date, events_for_slot};
