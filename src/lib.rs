// Back-office calendar library
// Event indexing, month grids and navigation for the scheduling view

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;
