//! Report formatting
//!
//! Renders computed metrics as human-readable multi-line text.

use super::calculator::{compute_metrics, distance, walking_calories};
use crate::error::TrackerResult;
use crate::models::{ActivityRecord, BodyProfile};
use crate::parser::as_hours_f64;

/// Training report: activity, duration, distance, speed and calories
pub fn summarize(record: &ActivityRecord, profile: &BodyProfile) -> TrackerResult<String> {
    let metrics = compute_metrics(record, profile)?;

    Ok(format!(
        "Activity type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        record.display_label(),
        as_hours_f64(record.duration),
        metrics.distance_km,
        metrics.mean_speed_kmh,
        metrics.calories_burned,
    ))
}

/// Step-only report; the steps are always treated as a walk
pub fn summarize_day(record: &ActivityRecord, profile: &BodyProfile) -> TrackerResult<String> {
    let calories = walking_calories(
        record.step_count,
        profile.weight_kg,
        profile.height_m,
        record.duration,
    )?;
    let distance_km = distance(record.step_count, profile.height_m);

    Ok(format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        record.step_count, distance_km, calories,
    ))
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::error::TrackerError;

    fn profile() -> BodyProfile {
        BodyProfile::new(75.0, 1.75)
    }

    fn record(label: Option<&str>) -> ActivityRecord {
        ActivityRecord {
            step_count: 1000,
            activity_label: label.map(str::to_string),
            duration: TimeDelta::minutes(30),
        }
    }

    #[test]
    fn test_summarize_running() {
        let report = summarize(&record(Some("бег")), &profile()).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Activity type: бег");
        assert_eq!(lines[1], "Duration: 0.50 h.");
        assert_eq!(lines[2], "Distance: 0.79 km.");
        assert_eq!(lines[3], "Speed: 1.57 km/h");
        assert_eq!(lines[4], "Calories burned: 59.06");
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_summarize_walking() {
        let report = summarize(&record(Some("Walking")), &profile()).unwrap();
        assert!(report.starts_with("Activity type: Walking\n"));
        assert!(report.contains("Calories burned: 29.53\n"));
    }

    #[test]
    fn test_summarize_without_label_defaults_to_walking() {
        let report = summarize(&record(None), &profile()).unwrap();
        assert!(report.starts_with("Activity type: walking\n"));
        assert!(report.contains("Calories burned: 29.53\n"));
    }

    #[test]
    fn test_summarize_unknown_activity() {
        let err = summarize(&record(Some("dancing")), &profile()).unwrap_err();
        assert_eq!(
            err,
            TrackerError::UnknownActivity {
                label: "dancing".to_string()
            }
        );
    }

    #[test]
    fn test_summarize_day() {
        let report = summarize_day(&record(None), &profile()).unwrap();
        assert_eq!(
            report,
            "Steps: 1000.\nDistance: 0.79 km.\nCalories burned: 29.53 kcal.\n"
        );
    }

    #[test]
    fn test_summarize_day_rejects_bad_weight() {
        let err = summarize_day(&record(None), &BodyProfile::new(0.0, 1.75)).unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let first = summarize(&record(Some("running")), &profile()).unwrap();
        let second = summarize(&record(Some("running")), &profile()).unwrap();
        assert_eq!(first, second);
    }
}
