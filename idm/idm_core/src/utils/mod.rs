//! Utility types.

pub mod config;

pub use config::ConfigValue;
