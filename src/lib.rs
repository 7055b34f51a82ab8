// Booking Calendar Library
// Time-grid engine for appointment scheduling: day-set generation,
// slot occupancy, event geometry and drag rescheduling.

pub mod engine;
pub mod models;
pub mod services;
pub mod utils;
