// Service module exports

pub mod scheduler;
