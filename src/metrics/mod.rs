//! Metrics calculation module
//!
//! Distance, mean speed and calorie formulas, plus report rendering.

pub mod calculator;
pub mod constants;
pub mod report;

pub use calculator::{
    calories_for, compute_metrics, distance, mean_speed, running_calories, walking_calories,
};
pub use report::{summarize, summarize_day};
