//! Status Tool
//!
//! Provides runtime status information about the steptrack service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::{self, BUILD_TIMESTAMP, VERSION};
use crate::config::TrackerConfig;
use crate::models::BodyProfile;

/// Usage instructions for AI assistants
pub const TRACKER_INSTRUCTIONS: &str = r#"
# Step Tracker Instructions

This guide explains how to compute activity metrics with the steptrack tools.

## Record Formats

Records are comma-separated. Whitespace around fields is ignored.

| Layout | Fields | Example |
|--------|--------|---------|
| Day steps | `steps,duration` | `1000,30m0s` |
| Training | `steps,activity,duration` | `6000, running, 45m` |

- **steps** - positive whole number
- **activity** - `running` / `бег` or `walking` / `ходьба` (any letter case)
- **duration** - number plus unit, units can be combined: `1h30m`, `45m`, `1.5h`, `90s`

A day-steps record has no activity and is treated as a walk.

## Tools

- `day_action_info(data, weight_kg?, height_m?)` - steps, distance and calories for a day-steps record
- `training_info(data, weight_kg?, height_m?)` - full training report (duration, distance, speed, calories)
- `compute_metrics(data, weight_kg?, height_m?)` - the same numbers as JSON

Weight and height fall back to the configured defaults when omitted.

## Formulas

```
step_length_m   = height_m × 0.45
distance_km     = steps × step_length_m / 1000
mean_speed_kmh  = distance_km / duration_hours
running_kcal    = weight_kg × mean_speed_kmh × duration_minutes / 60
walking_kcal    = running_kcal × 0.5
```

All reported values are rounded to 2 decimal places.

## Errors

- **format** - wrong number of fields
- **parse** - steps or duration could not be read
- **validation** - steps, weight, height or duration is not positive
- **unknown_activity** - activity is not one of the supported names
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct TrackerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Profile used when callers omit weight or height
    pub default_profile: BodyProfile,
    pub records_processed: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: TrackerConfig,
    records_processed: u64,
}

impl StatusTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            start_time: Instant::now(),
            config,
            records_processed: 0,
        }
    }

    /// Count one handled record, successful or not
    pub fn record_processed(&mut self) {
        self.records_processed += 1;
    }

    pub fn get_status(&self) -> TrackerStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TrackerStatus {
            build_number: build_info::build_number(),
            build_timestamp: BUILD_TIMESTAMP,
            version: VERSION,
            default_profile: self.config.default_profile,
            records_processed: self.records_processed,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
