//! Step Tracker Library
//!
//! Distance, speed and calorie estimates from compact step records.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod tools;

pub use error::{Field, TrackerError, TrackerResult};
