//! Command implementations

pub mod config;

pub use config::run_config;
