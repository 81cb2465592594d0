// Module exports for models

pub mod calendar_day;
pub mod event;
pub mod settings;
