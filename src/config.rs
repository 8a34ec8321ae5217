//! Runtime configuration
//!
//! Default body profile for callers that do not pass weight or height.

use thiserror::Error;

use crate::metrics::calculator::is_positive_finite;
use crate::models::BodyProfile;

pub const WEIGHT_ENV: &str = "STEPTRACK_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "STEPTRACK_HEIGHT_M";

pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_HEIGHT_M: f64 = 1.75;

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be a positive finite number, got {value:?}")]
    NotPositive { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub default_profile: BodyProfile,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_profile: BodyProfile::new(DEFAULT_WEIGHT_KG, DEFAULT_HEIGHT_M),
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read configuration through `get`, so tests need not touch the process env
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight_kg = read_number(&mut get, WEIGHT_ENV)?.unwrap_or(DEFAULT_WEIGHT_KG);
        let height_m = read_number(&mut get, HEIGHT_ENV)?.unwrap_or(DEFAULT_HEIGHT_M);
        Ok(Self {
            default_profile: BodyProfile::new(weight_kg, height_m),
        })
    }

    /// Fill in whichever measurements the caller left out
    pub fn profile_or_default(&self, weight_kg: Option<f64>, height_m: Option<f64>) -> BodyProfile {
        BodyProfile::new(
            weight_kg.unwrap_or(self.default_profile.weight_kg),
            height_m.unwrap_or(self.default_profile.height_m),
        )
    }
}

fn read_number<F>(get: &mut F, var: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: FnMut(&str) -> Option<String>,
{
    match get(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => {
            let value = match raw.trim().parse::<f64>() {
                Ok(v) => v,
                Err(_) => return Err(ConfigError::InvalidNumber { var, value: raw }),
            };
            if !is_positive_finite(value) {
                return Err(ConfigError::NotPositive { var, value: raw });
            }
            Ok(Some(value))
        }
    }
}
