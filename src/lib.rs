// src/lib.rs

pub mod attempt;
pub mod config;
pub mod error;
pub mod grading;
pub mod handlers;
pub mod mappings;
pub mod models;
pub mod routes;
pub mod sources;
pub mod state;
pub mod utils;

// Re-export specific items for convenience if needed
pub use routes::create_router;
