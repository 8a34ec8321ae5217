//! Data models
//!
//! Plain values passed between the record parser and the metrics calculator.

mod activity;
mod metrics;
mod profile;

pub use activity::{ActivityKind, ActivityRecord, RecordLayout};
pub use metrics::ComputedMetrics;
pub use profile::BodyProfile;
