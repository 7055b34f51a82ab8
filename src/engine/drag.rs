//! Drag-based rescheduling: the pure resolver plus the drag-gesture
//! state machine that drives it.

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::models::event::Event;

/// Typed key for a drag-and-drop target cell.
///
/// `day` indexes into the day set produced by
/// [`days_to_display`](crate::engine::grid::days_to_display) for the
/// active view; `hour` is one of [`time_slots`](crate::engine::grid::time_slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropCell {
    pub day: usize,
    pub hour: u32,
}

/// A copy of `event` moved to `drop_date` at `drop_hour:00`, preserving
/// the original duration to the minute. Every other field is cloned
/// unchanged; the caller persists the result.
///
/// `drop_hour` must come from the hour grid (0-23); values outside that
/// range are a caller contract violation and panic.
pub fn reschedule(event: &Event, drop_hour: u32, drop_date: NaiveDate) -> Event {
    let duration = Duration::minutes(event.duration_minutes());
    let new_start = drop_date
        .and_hms_opt(drop_hour, 0, 0)
        .expect("drop hour must be within the 0-23 slot grid");

    Event {
        start: new_start,
        end: new_start + duration,
        ..event.clone()
    }
}

/// In-flight drag gesture data.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    pub event_id: String,
    /// Original appointment length, kept for drop previews.
    pub duration: Duration,
    pub hovered: Option<DropCell>,
}

/// Drag gesture lifecycle: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging(DragContext),
}

/// Explicit state machine for the pointer drag gesture.
///
/// The owning UI layer calls [`begin`](DragController::begin) on drag
/// start, [`update_hover`](DragController::update_hover) as the pointer
/// crosses cells, and [`finish`](DragController::finish) on release.
/// `finish` resolves the reschedule exactly when a drop target is
/// hovered; a release with no target (or an explicit
/// [`cancel`](DragController::cancel)) returns to idle without producing
/// an update.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active(&self) -> Option<&DragContext> {
        match &self.state {
            DragState::Dragging(context) => Some(context),
            DragState::Idle => None,
        }
    }

    /// Start dragging `event`. A gesture already in flight is replaced.
    pub fn begin(&mut self, event: &Event) {
        debug!("drag started for event {}", event.id);
        self.state = DragState::Dragging(DragContext {
            event_id: event.id.clone(),
            duration: event.end - event.start,
            hovered: None,
        });
    }

    /// Record the cell currently under the pointer. Ignored when idle.
    pub fn update_hover(&mut self, cell: DropCell) {
        if let DragState::Dragging(context) = &mut self.state {
            context.hovered = Some(cell);
        }
    }

    /// Pointer left the grid; a release now cancels the gesture.
    pub fn clear_hover(&mut self) {
        if let DragState::Dragging(context) = &mut self.state {
            context.hovered = None;
        }
    }

    /// Abort the gesture without producing an update.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Complete the gesture (`Dragging -> Idle`).
    ///
    /// Returns the rescheduled event when a valid drop cell was hovered:
    /// `days` is the day set of the active view (resolving the cell's day
    /// index) and `events` the caller's event list (resolving the dragged
    /// id). Any missing piece - no hover, day index out of range, event
    /// gone from the list - yields `None` and leaves every event untouched.
    pub fn finish(&mut self, days: &[NaiveDate], events: &[Event]) -> Option<Event> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging(context) = state else {
            return None;
        };

        let cell = context.hovered?;
        let drop_date = *days.get(cell.day)?;
        let event = events.iter().find(|e| e.id == context.event_id)?;

        debug!(
            "drag finished: event {} dropped on {} {:02}:00",
            event.id, drop_date, cell.hour
        );
        Some(reschedule(event, cell.hour, drop_date))
    }
}
