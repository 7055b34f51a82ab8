// Model module exports

pub mod event;
pub mod service;
pub mod view;
