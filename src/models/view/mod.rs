// View Types
// Calendar view modes offered by the time grid

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar view types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

impl CalendarView {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "Day",
            CalendarView::Week => "Week",
            CalendarView::Month => "Month",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(CalendarView::Day),
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(format!("Unknown calendar view: {}", other)),
        }
    }
}
