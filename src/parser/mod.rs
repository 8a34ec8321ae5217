//! Record parser module
//!
//! Handles record splitting, field validation and duration expressions.

pub mod duration;
pub mod record;

pub use duration::{as_hours_f64, as_minutes_f64, as_seconds_f64, parse_duration, DurationError};
pub use record::{parse_record, parse_record_as};
