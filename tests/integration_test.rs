// Integration tests for the render and reschedule pipelines:
// day set -> per-cell occupancy -> geometry, and
// drag gesture -> patched event -> scheduler -> callback -> re-render.

mod fixtures;

use std::sync::mpsc;

use booking_calendar::engine::{
    days_to_display, events_for_date, events_for_slot, position_of, reschedule, DragController,
    DropCell,
};
use booking_calendar::models::service::DEFAULT_SERVICE_COLOR;
use booking_calendar::models::view::CalendarView;
use booking_calendar::services::scheduler::SchedulerService;

use chrono::Datelike;
use pretty_assertions::assert_eq;

#[test]
fn test_week_render_pipeline() {
    let events = fixtures::appointments();
    let anchor = fixtures::anchor_day();

    let days = days_to_display(anchor, CalendarView::Week);
    assert_eq!(days.len(), 7);
    // Saturday anchor lands in the last column
    assert_eq!(days[6], anchor);

    // All four appointments fall on the anchor day, none elsewhere
    for day in &days[..6] {
        assert!(events_for_date(&events, *day).is_empty());
    }
    assert_eq!(events_for_date(&events, anchor).len(), 4);

    // The 9:00 slot holds both overlapping morning appointments
    let morning = events_for_slot(&events, anchor, 9);
    let ids: Vec<&str> = morning.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["apt-1", "apt-2"]);

    // Caller-assigned half-width columns place them side by side
    let first = position_of(morning[0], 50.0, 0);
    let second = position_of(morning[1], 50.0, 1);
    assert_eq!(first.top, 540.0);
    assert_eq!(first.left, 0.0);
    assert_eq!(second.top, 570.0);
    assert_eq!(second.left, 50.0);
    assert_eq!(second.height, 60.0);

    // The long afternoon appointment (13:00-15:30) occupies 13 and 14;
    // its end hour is excluded by the slot predicate
    let occupied: Vec<u32> = booking_calendar::engine::time_slots()
        .into_iter()
        .filter(|hour| {
            events_for_slot(&events, anchor, *hour)
                .iter()
                .any(|e| e.id == "apt-3")
        })
        .collect();
    assert_eq!(occupied, vec![13, 14]);
}

#[test]
fn test_month_grid_brackets_the_anchor_month() {
    let days = days_to_display(fixtures::anchor_day(), CalendarView::Month);

    assert_eq!(days.len(), 42);
    // May 2025 starts on Thursday: four April padding days lead
    assert_eq!(days[0].month(), 4);
    assert_eq!(days[4].day(), 1);
    assert_eq!(days[4].month(), 5);
    assert_eq!(days[41].month(), 6);
}

#[test]
fn test_service_colors_resolve_with_default_fallback() {
    let scheduler = SchedulerService::new(fixtures::appointments(), fixtures::services());
    let catalog = scheduler.catalog();

    let colors: Vec<&str> = scheduler
        .events()
        .iter()
        .map(|e| catalog.color_of(&e.service_id))
        .collect();

    assert_eq!(
        colors,
        vec!["#3B82F6", "#8B5CF6", "#8B5CF6", DEFAULT_SERVICE_COLOR]
    );
}

#[test]
fn test_drag_reschedule_round_trip_through_scheduler() {
    let mut scheduler = SchedulerService::new(fixtures::appointments(), fixtures::services());
    let (tx, rx) = mpsc::channel();
    scheduler.set_on_update(move |event| {
        tx.send(event.clone()).unwrap();
    });

    let anchor = fixtures::anchor_day();
    let days = days_to_display(anchor, CalendarView::Week);

    // Drag apt-3 (13:00-15:30) to Monday 08:00
    let dragged = scheduler.events()[2].clone();
    let mut controller = DragController::new();
    controller.begin(&dragged);
    controller.update_hover(DropCell { day: 1, hour: 8 });
    let moved = controller
        .finish(&days, scheduler.events())
        .expect("hovered drop cell resolves to an update");

    scheduler.apply_update(moved.clone()).unwrap();

    // Observer saw exactly the applied event
    let observed = rx.try_recv().unwrap();
    assert_eq!(observed, moved);

    // Re-feed the updated list through the pipeline: the appointment now
    // occupies Monday 08:00-10:30 and has left the anchor day
    let monday = days[1];
    assert_eq!(
        events_for_slot(scheduler.events(), monday, 8)
            .iter()
            .map(|e| e.id.as_str())
            .collect::<Vec<_>>(),
        vec!["apt-3"]
    );
    assert!(events_for_slot(scheduler.events(), anchor, 13).is_empty());

    let geometry = position_of(&moved, 100.0, 0);
    assert_eq!(geometry.top, 480.0);
    assert_eq!(geometry.height, 150.0);
}

#[test]
fn test_cancelled_drag_leaves_the_book_untouched() {
    let scheduler = SchedulerService::new(fixtures::appointments(), fixtures::services());
    let days = days_to_display(fixtures::anchor_day(), CalendarView::Week);

    let mut controller = DragController::new();
    controller.begin(&scheduler.events()[0]);
    controller.update_hover(DropCell { day: 3, hour: 11 });
    controller.cancel();

    assert!(controller.finish(&days, scheduler.events()).is_none());
    assert_eq!(scheduler.events(), fixtures::appointments());
}

#[test]
fn test_reschedule_is_pure() {
    let events = fixtures::appointments();
    let before = events.clone();

    let _ = reschedule(&events[0], 12, fixtures::anchor_day());
    assert_eq!(events, before);
}

#[test]
fn test_event_list_round_trips_as_json() {
    let events = fixtures::appointments();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<booking_calendar::models::event::Event> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}
