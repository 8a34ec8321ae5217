//! Metric formulas
//!
//! Derives distance, mean speed and calories burned from step counts, body
//! measurements and elapsed time.

use chrono::TimeDelta;

use super::constants::{MIN_IN_H, M_IN_KM, STEP_LENGTH_COEFFICIENT, WALKING_CALORIES_COEFFICIENT};
use crate::error::{Field, TrackerError, TrackerResult};
use crate::models::{ActivityKind, ActivityRecord, BodyProfile, ComputedMetrics};
use crate::parser::{as_hours_f64, as_minutes_f64, as_seconds_f64};

/// Distance covered in kilometers
///
/// Step length is estimated from height: `height_m * 0.45`.
pub fn distance(steps: i64, height_m: f64) -> f64 {
    let step_length = height_m * STEP_LENGTH_COEFFICIENT;
    steps as f64 * step_length / M_IN_KM
}

/// Mean speed in km/h, or 0 for a non-positive duration
pub fn mean_speed(steps: i64, height_m: f64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance(steps, height_m) / as_hours_f64(duration)
}

/// Calories burned running: `weight_kg * speed_kmh * minutes / 60`
pub fn running_calories(
    steps: i64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    validate_inputs(steps, weight_kg, height_m, duration)?;

    let speed = mean_speed(steps, height_m, duration);
    Ok(weight_kg * speed * as_minutes_f64(duration) / MIN_IN_H)
}

/// Calories burned walking: the running formula scaled by 0.5
pub fn walking_calories(
    steps: i64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    let calories = running_calories(steps, weight_kg, height_m, duration)?;
    Ok(calories * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned for the given activity type
pub fn calories_for(
    kind: ActivityKind,
    steps: i64,
    profile: &BodyProfile,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    match kind {
        ActivityKind::Running => {
            running_calories(steps, profile.weight_kg, profile.height_m, duration)
        }
        ActivityKind::Walking => {
            walking_calories(steps, profile.weight_kg, profile.height_m, duration)
        }
    }
}

/// Compute all metrics for a parsed record
pub fn compute_metrics(
    record: &ActivityRecord,
    profile: &BodyProfile,
) -> TrackerResult<ComputedMetrics> {
    let kind = record.activity_kind()?;
    let calories_burned = calories_for(kind, record.step_count, profile, record.duration)?;

    let metrics = ComputedMetrics {
        distance_km: distance(record.step_count, profile.height_m),
        mean_speed_kmh: mean_speed(record.step_count, profile.height_m, record.duration),
        calories_burned,
    };

    tracing::debug!(
        activity = kind.as_str(),
        distance_km = metrics.distance_km,
        calories = metrics.calories_burned,
        "Computed activity metrics"
    );

    Ok(metrics)
}

/// Check that every formula input is strictly positive, first failure wins
fn validate_inputs(
    steps: i64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<()> {
    if steps <= 0 {
        return Err(TrackerError::not_positive(Field::Steps, steps));
    }
    if !is_positive_finite(weight_kg) {
        return Err(TrackerError::not_positive(Field::Weight, weight_kg));
    }
    if !is_positive_finite(height_m) {
        return Err(TrackerError::not_positive(Field::Height, height_m));
    }
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::not_positive(
            Field::Duration,
            format!("{}s", as_seconds_f64(duration)),
        ));
    }
    Ok(())
}

/// False for NaN and infinities as well as non-positive values
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
