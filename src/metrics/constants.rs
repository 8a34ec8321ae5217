//! Calculation constants
//!
//! Empirical coefficients used by the distance and calorie formulas.

/// Estimated step length as a fraction of body height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

/// Meters per kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
pub const MIN_IN_H: f64 = 60.0;

/// Walking burns this fraction of the running formula's calories
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
