//! Computed metrics model

use serde::{Deserialize, Serialize};

/// Metrics derived from one activity record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_burned: f64,
}
