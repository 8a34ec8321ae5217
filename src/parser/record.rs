//! Record parsing
//!
//! Decodes comma-separated activity records into [`ActivityRecord`] values.

use chrono::TimeDelta;

use super::duration::parse_duration;
use crate::error::{Field, TrackerError, TrackerResult};
use crate::models::{ActivityRecord, RecordLayout};

/// Parse a record in either layout, picked by its field count
///
/// Examples:
/// - "1000,30m0s" -> day-step record
/// - "1000, бег, 30m0s" -> training record labelled "бег"
pub fn parse_record(raw: &str) -> TrackerResult<ActivityRecord> {
    let fields = split_fields(raw);
    let layout = RecordLayout::from_field_count(fields.len()).ok_or(TrackerError::Format {
        // Three fields is the fuller of the two layouts, so report that one
        expected: RecordLayout::Training,
        found: fields.len(),
    })?;
    decode(&fields, layout)
}

/// Parse a record that must use the given layout
pub fn parse_record_as(raw: &str, layout: RecordLayout) -> TrackerResult<ActivityRecord> {
    let fields = split_fields(raw);
    if fields.len() != layout.field_count() {
        return Err(TrackerError::Format {
            expected: layout,
            found: fields.len(),
        });
    }
    decode(&fields, layout)
}

fn split_fields(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

fn decode(fields: &[&str], layout: RecordLayout) -> TrackerResult<ActivityRecord> {
    let step_count = parse_steps(fields[0])?;

    let (activity_label, duration_field) = match layout {
        RecordLayout::DaySteps => (None, fields[1]),
        RecordLayout::Training => (Some(fields[1].to_string()), fields[2]),
    };
    let duration = parse_positive_duration(duration_field)?;

    tracing::debug!(
        steps = step_count,
        activity = activity_label.as_deref().unwrap_or("-"),
        duration_secs = duration.num_seconds(),
        "Parsed activity record"
    );

    Ok(ActivityRecord {
        step_count,
        activity_label,
        duration,
    })
}

fn parse_steps(field: &str) -> TrackerResult<i64> {
    let steps = field
        .parse::<i64>()
        .map_err(|e| TrackerError::parse(Field::Steps, field, e.to_string()))?;
    if steps <= 0 {
        return Err(TrackerError::not_positive(Field::Steps, steps));
    }
    Ok(steps)
}

fn parse_positive_duration(field: &str) -> TrackerResult<TimeDelta> {
    let duration = parse_duration(field)
        .map_err(|e| TrackerError::parse(Field::Duration, field, e.to_string()))?;
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::not_positive(Field::Duration, field));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_steps() {
        let rec = parse_record("1000,30m0s").unwrap();
        assert_eq!(rec.step_count, 1000);
        assert_eq!(rec.activity_label, None);
        assert_eq!(rec.duration, TimeDelta::minutes(30));
    }

    #[test]
    fn test_parse_training() {
        let rec = parse_record("1000,бег,30m0s").unwrap();
        assert_eq!(rec.step_count, 1000);
        assert_eq!(rec.activity_label.as_deref(), Some("бег"));
        assert_eq!(rec.duration, TimeDelta::minutes(30));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let rec = parse_record("  3456 , Walking ,  1h15m \n").unwrap();
        assert_eq!(rec.step_count, 3456);
        assert_eq!(rec.activity_label.as_deref(), Some("Walking"));
        assert_eq!(rec.duration, TimeDelta::minutes(75));
    }

    #[test]
    fn test_label_not_validated_at_parse_time() {
        let rec = parse_record("1000,dancing,30m0s").unwrap();
        assert_eq!(rec.activity_label.as_deref(), Some("dancing"));
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            parse_record("1000"),
            Err(TrackerError::Format {
                expected: RecordLayout::Training,
                found: 1
            })
        );
        assert!(matches!(
            parse_record("1,2,3,4"),
            Err(TrackerError::Format { found: 4, .. })
        ));
        assert!(matches!(parse_record(""), Err(TrackerError::Format { found: 1, .. })));
    }

    #[test]
    fn test_strict_layouts() {
        assert_eq!(
            parse_record_as("1000,running,1h", RecordLayout::DaySteps),
            Err(TrackerError::Format {
                expected: RecordLayout::DaySteps,
                found: 3
            })
        );
        assert_eq!(
            parse_record_as("1000,1h", RecordLayout::Training),
            Err(TrackerError::Format {
                expected: RecordLayout::Training,
                found: 2
            })
        );
        assert!(parse_record_as("1000,1h", RecordLayout::DaySteps).is_ok());
    }

    #[test]
    fn test_bad_steps() {
        assert!(matches!(
            parse_record("abc,1h"),
            Err(TrackerError::Parse { field: Field::Steps, .. })
        ));
        assert!(matches!(
            parse_record("12.5,1h"),
            Err(TrackerError::Parse { field: Field::Steps, .. })
        ));
        assert!(matches!(
            parse_record(",1h"),
            Err(TrackerError::Parse { field: Field::Steps, .. })
        ));
    }

    #[test]
    fn test_non_positive_steps() {
        assert_eq!(
            parse_record("0,1h"),
            Err(TrackerError::Validation {
                field: Field::Steps,
                value: "0".to_string()
            })
        );
        assert!(matches!(
            parse_record("-20,walking,1h"),
            Err(TrackerError::Validation { field: Field::Steps, .. })
        ));
    }

    #[test]
    fn test_bad_duration() {
        assert_eq!(
            parse_record("1000,30"),
            Err(TrackerError::Parse {
                field: Field::Duration,
                value: "30".to_string(),
                reason: "missing unit in duration".to_string()
            })
        );
        assert!(matches!(
            parse_record("1000,running,soon"),
            Err(TrackerError::Parse { field: Field::Duration, .. })
        ));
    }

    #[test]
    fn test_non_positive_duration() {
        assert_eq!(
            parse_record("1000,0s"),
            Err(TrackerError::Validation {
                field: Field::Duration,
                value: "0s".to_string()
            })
        );
        assert!(matches!(
            parse_record("1000,running,-1h"),
            Err(TrackerError::Validation { field: Field::Duration, .. })
        ));
    }

    #[test]
    fn test_steps_checked_before_duration() {
        assert!(matches!(
            parse_record("0,nonsense"),
            Err(TrackerError::Validation { field: Field::Steps, .. })
        ));
    }
}
