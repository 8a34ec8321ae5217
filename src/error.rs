//! Error types
//!
//! Typed failures for record parsing and metric computation.

use std::fmt;

use thiserror::Error;

use crate::models::RecordLayout;

/// Input field an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Steps,
    Weight,
    Height,
    Duration,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Steps => "steps",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Duration => "duration",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracker error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("Invalid record format: expected {expected}, got {found} field(s)")]
    Format {
        expected: RecordLayout,
        found: usize,
    },

    #[error("Failed to parse {field} from {value:?}: {reason}")]
    Parse {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("{field} must be positive, got {value}")]
    Validation { field: Field, value: String },

    #[error("Unknown activity type: {label:?}")]
    UnknownActivity { label: String },
}

impl TrackerError {
    pub(crate) fn parse(field: Field, value: &str, reason: impl Into<String>) -> Self {
        TrackerError::Parse {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_positive(field: Field, value: impl fmt::Display) -> Self {
        TrackerError::Validation {
            field,
            value: value.to_string(),
        }
    }

    /// Short machine-readable kind, used in logs and tool responses
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::Format { .. } => "format",
            TrackerError::Parse { .. } => "parse",
            TrackerError::Validation { .. } => "validation",
            TrackerError::UnknownActivity { .. } => "unknown_activity",
        }
    }
}

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
