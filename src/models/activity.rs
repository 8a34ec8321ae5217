//! Activity model
//!
//! Represents a parsed activity record and the supported activity vocabulary.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Supported activity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
}

/// Accepted surface forms, matched after lowercasing
const ACTIVITY_ALIASES: &[(&str, ActivityKind)] = &[
    ("running", ActivityKind::Running),
    ("бег", ActivityKind::Running),
    ("walking", ActivityKind::Walking),
    ("ходьба", ActivityKind::Walking),
];

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::Walking => "walking",
        }
    }

    /// Resolve a user-supplied label (case-insensitive, either spelling)
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        ACTIVITY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field layout of a raw record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// `steps,duration`
    DaySteps,
    /// `steps,activity,duration`
    Training,
}

impl RecordLayout {
    pub fn field_count(&self) -> usize {
        match self {
            RecordLayout::DaySteps => 2,
            RecordLayout::Training => 3,
        }
    }

    pub fn from_field_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(RecordLayout::DaySteps),
            3 => Some(RecordLayout::Training),
            _ => None,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            RecordLayout::DaySteps => "steps,duration",
            RecordLayout::Training => "steps,activity,duration",
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.pattern())
    }
}

/// A validated activity record
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub step_count: i64,
    /// Label exactly as supplied; `None` for day-step records
    pub activity_label: Option<String>,
    pub duration: TimeDelta,
}

impl ActivityRecord {
    pub fn layout(&self) -> RecordLayout {
        match self.activity_label {
            Some(_) => RecordLayout::Training,
            None => RecordLayout::DaySteps,
        }
    }

    /// Resolve the activity type; records without a label count as walking
    pub fn activity_kind(&self) -> TrackerResult<ActivityKind> {
        match self.activity_label.as_deref() {
            None => Ok(ActivityKind::Walking),
            Some(label) => {
                ActivityKind::from_label(label).ok_or_else(|| TrackerError::UnknownActivity {
                    label: label.to_string(),
                })
            }
        }
    }

    /// Label used in reports
    pub fn display_label(&self) -> &str {
        self.activity_label
            .as_deref()
            .unwrap_or(ActivityKind::Walking.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: Option<&str>) -> ActivityRecord {
        ActivityRecord {
            step_count: 1000,
            activity_label: label.map(str::to_string),
            duration: TimeDelta::minutes(30),
        }
    }

    #[test]
    fn test_from_label_both_spellings() {
        assert_eq!(ActivityKind::from_label("running"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("бег"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("walking"), Some(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_label("ходьба"), Some(ActivityKind::Walking));
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(ActivityKind::from_label("RUNNING"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("Бег"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_label("ХОДЬБА"), Some(ActivityKind::Walking));
        assert_eq!(ActivityKind::from_label(" Walking "), Some(ActivityKind::Walking));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(ActivityKind::from_label("dancing"), None);
        assert_eq!(ActivityKind::from_label(""), None);
        assert_eq!(ActivityKind::from_label("run"), None);
    }

    #[test]
    fn test_record_without_label_is_walking() {
        let rec = record(None);
        assert_eq!(rec.activity_kind(), Ok(ActivityKind::Walking));
        assert_eq!(rec.display_label(), "walking");
        assert_eq!(rec.layout(), RecordLayout::DaySteps);
    }

    #[test]
    fn test_record_keeps_label_spelling() {
        let rec = record(Some("Бег"));
        assert_eq!(rec.activity_kind(), Ok(ActivityKind::Running));
        assert_eq!(rec.display_label(), "Бег");
        assert_eq!(rec.layout(), RecordLayout::Training);
    }

    #[test]
    fn test_record_unknown_label() {
        let err = record(Some("dancing")).activity_kind().unwrap_err();
        assert_eq!(
            err,
            TrackerError::UnknownActivity {
                label: "dancing".to_string()
            }
        );
    }

    #[test]
    fn test_layout_field_counts() {
        assert_eq!(RecordLayout::from_field_count(2), Some(RecordLayout::DaySteps));
        assert_eq!(RecordLayout::from_field_count(3), Some(RecordLayout::Training));
        assert_eq!(RecordLayout::from_field_count(1), None);
        assert_eq!(RecordLayout::from_field_count(4), None);
        assert_eq!(RecordLayout::Training.field_count(), 3);
    }
}
