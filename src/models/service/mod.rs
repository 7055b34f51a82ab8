// Service module
// Booking category with display color, plus the memoized lookup catalog

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tint applied when an event's `service_id` has no matching service.
pub const DEFAULT_SERVICE_COLOR: &str = "#94A3B8";

/// A booking category (haircut, consultation, ...).
///
/// `color` is a `#RRGGBB` hex string used purely for rendering tint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Decode the hex color, if well-formed.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_color(&self.color)
    }
}

/// Parse a hex color string to an RGB triple.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some((r, g, b))` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Id-indexed view over a service list, built once per render pass instead
/// of re-scanning the list for every event.
pub struct ServiceCatalog<'a> {
    by_id: HashMap<&'a str, &'a Service>,
}

impl<'a> ServiceCatalog<'a> {
    pub fn from_services(services: &'a [Service]) -> Self {
        Self {
            by_id: services.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    pub fn get(&self, service_id: &str) -> Option<&'a Service> {
        self.by_id.get(service_id).copied()
    }

    /// Display color for a service id, or [`DEFAULT_SERVICE_COLOR`] when
    /// the id has no matching service.
    pub fn color_of(&self, service_id: &str) -> &'a str {
        self.get(service_id)
            .map(|s| s.color.as_str())
            .unwrap_or(DEFAULT_SERVICE_COLOR)
    }
}
