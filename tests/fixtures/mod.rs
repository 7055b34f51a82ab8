// Test fixtures - reusable test data
// A small salon appointment book shared across integration tests

use chrono::{NaiveDate, NaiveDateTime};

use booking_calendar::models::event::{Event, EventStatus};
use booking_calendar::models::service::Service;

/// Saturday, May 10, 2025 - the anchor day most scenarios use
pub fn anchor_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// Booking categories with distinct tint colors
pub fn services() -> Vec<Service> {
    vec![
        Service::new("svc-cut", "Haircut", "#3B82F6"),
        Service::new("svc-color", "Coloring", "#8B5CF6"),
        Service::new("svc-consult", "Consultation", "#10B981"),
    ]
}

/// One day of appointments: two overlapping morning slots, one long
/// afternoon slot, and one referencing a service that does not exist.
pub fn appointments() -> Vec<Event> {
    let day = anchor_day();
    vec![
        Event::builder()
            .id("apt-1")
            .title("Cut & Blowdry")
            .service_id("svc-cut")
            .client_name("Dana Reyes")
            .start(at(day, 9, 0))
            .end(at(day, 10, 0))
            .build()
            .unwrap(),
        Event::builder()
            .id("apt-2")
            .title("Root Touch-up")
            .service_id("svc-color")
            .client_name("Sam Okafor")
            .start(at(day, 9, 30))
            .end(at(day, 10, 30))
            .build()
            .unwrap(),
        Event::builder()
            .id("apt-3")
            .title("Full Color")
            .service_id("svc-color")
            .client_name("Ira Lindqvist")
            .status(EventStatus::Scheduled)
            .start(at(day, 13, 0))
            .end(at(day, 15, 30))
            .build()
            .unwrap(),
        Event::builder()
            .id("apt-4")
            .title("Walk-in")
            .service_id("svc-retired")
            .client_name("Noor Haddad")
            .start(at(day, 16, 0))
            .end(at(day, 16, 45))
            .build()
            .unwrap(),
    ]
}
