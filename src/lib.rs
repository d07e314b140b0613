pub mod config;
pub mod dashboard;
pub mod loader;
pub mod models;
pub mod processor;
