// Scheduler service
// In-memory ownership of the event and service lists, and the seam
// through which reschedule results flow back to the host application.

use anyhow::{bail, Result};
use log::{info, warn};

use crate::models::event::Event;
use crate::models::service::{Service, ServiceCatalog};

/// Host-supplied observer invoked with every applied event update.
pub type UpdateCallback = Box<dyn FnMut(&Event) + Send>;

/// Owns the in-memory appointment book.
///
/// The engine itself never mutates event data; updates produced by the
/// drag resolver (or any other edit path) are applied here, which keeps
/// render-path reads safe by construction and gives the host a single
/// notification point for persistence.
pub struct SchedulerService {
    events: Vec<Event>,
    services: Vec<Service>,
    on_update: Option<UpdateCallback>,
}

impl SchedulerService {
    pub fn new(events: Vec<Event>, services: Vec<Service>) -> Self {
        Self {
            events,
            services,
            on_update: None,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Id-indexed service lookup for the current render pass.
    pub fn catalog(&self) -> ServiceCatalog<'_> {
        ServiceCatalog::from_services(&self.services)
    }

    /// Register the observer notified after each applied update.
    pub fn set_on_update(&mut self, callback: impl FnMut(&Event) + Send + 'static) {
        self.on_update = Some(Box::new(callback));
    }

    /// Replace the stored event carrying `updated.id` and notify the
    /// registered observer.
    ///
    /// Fails when no stored event has that id; the list is left unchanged.
    pub fn apply_update(&mut self, updated: Event) -> Result<()> {
        let Some(index) = self.events.iter().position(|e| e.id == updated.id) else {
            warn!("rejected update for unknown event {}", updated.id);
            bail!("no event with id '{}'", updated.id);
        };

        info!(
            "event {} moved to {} - {}",
            updated.id, updated.start, updated.end
        );
        self.events[index] = updated;

        if let Some(callback) = self.on_update.as_mut() {
            callback(&self.events[index]);
        }

        Ok(())
    }
}
