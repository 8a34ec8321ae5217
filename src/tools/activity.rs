//! Activity tools
//!
//! Parse-then-compute pipelines behind the MCP tools and the report binary.

use serde::Serialize;

use crate::error::TrackerResult;
use crate::metrics::{compute_metrics, summarize, summarize_day};
use crate::models::{BodyProfile, RecordLayout};
use crate::parser::{as_hours_f64, parse_record, parse_record_as};

/// Response for compute_metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResponse {
    pub activity: String,
    pub steps: i64,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_burned: f64,
}

/// Training report for a `steps,activity,duration` (or `steps,duration`) record
pub fn training_info(data: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    let profile = BodyProfile::new(weight_kg, height_m);
    parse_record(data)
        .and_then(|record| summarize(&record, &profile))
        .inspect_err(|e| log_rejected(data, e))
}

/// Step-only report for a `steps,duration` record
pub fn day_action_info(data: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    let profile = BodyProfile::new(weight_kg, height_m);
    parse_record_as(data, RecordLayout::DaySteps)
        .and_then(|record| summarize_day(&record, &profile))
        .inspect_err(|e| log_rejected(data, e))
}

/// Report for a record in either layout, picked from its field count
pub fn record_report(data: &str, profile: &BodyProfile) -> TrackerResult<String> {
    parse_record(data)
        .and_then(|record| match record.layout() {
            RecordLayout::DaySteps => summarize_day(&record, profile),
            RecordLayout::Training => summarize(&record, profile),
        })
        .inspect_err(|e| log_rejected(data, e))
}

/// Structured metrics for a record in either layout
pub fn metrics_info(data: &str, profile: &BodyProfile) -> TrackerResult<MetricsResponse> {
    let result = parse_record(data).and_then(|record| {
        let metrics = compute_metrics(&record, profile)?;
        let activity = record.activity_kind()?;
        Ok(MetricsResponse {
            activity: activity.as_str().to_string(),
            steps: record.step_count,
            duration_hours: round2(as_hours_f64(record.duration)),
            distance_km: round2(metrics.distance_km),
            mean_speed_kmh: round2(metrics.mean_speed_kmh),
            calories_burned: round2(metrics.calories_burned),
        })
    });
    result.inspect_err(|e| log_rejected(data, e))
}

fn log_rejected(data: &str, err: &crate::error::TrackerError) {
    tracing::warn!(record = data, kind = err.kind(), "Rejected activity record: {}", err);
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
