// Service module exports

pub mod calendar;
pub mod event;
pub mod event_index;
pub mod month_grid;
pub mod navigation;
pub mod settings;
