// Event module
// Bookable appointment model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment.
///
/// Status affects presentation only; the engine treats all statuses
/// identically for occupancy and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Scheduled
    }
}

/// A single bookable appointment.
///
/// `start` and `end` are local wall-clock timestamps, serialized as
/// ISO-8601 (`2025-05-10T10:00:00`). `end` must be strictly after `start`
/// for duration math to produce a positive height; the engine assumes
/// this rather than validating it on every call (see [`Event::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Reference to a booking [`Service`](crate::models::service::Service).
    /// A dangling reference is legal; color lookup falls back to the
    /// default tint.
    pub service_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub client_name: String,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Stable unique identifier
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Appointment start time
    /// * `end` - Appointment end time
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            service_id: String::new(),
            start,
            end,
            client_name: String::new(),
            status: EventStatus::Scheduled,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Duration of the appointment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    service_id: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    client_name: Option<String>,
    status: EventStatus,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            service_id: None,
            start: None,
            end: None,
            client_name: None,
            status: EventStatus::Scheduled,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id,
            title,
            service_id: self.service_id.unwrap_or_default(),
            start,
            end,
            client_name: self.client_name.unwrap_or_default(),
            status: self.status,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
