use crate::common::walk_exception::{ErrCode, WalkError};
use crate::walk::interval::Interval;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Where step magnitudes are drawn from: the real-valued interval or its
/// integer lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum StepMode {
    #[strum(serialize = "continuous")]
    Continuous,
    #[strum(serialize = "discrete")]
    Discrete,
}

/// Validated step parameters for walk generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    pub interval: Interval,
    pub probability: f64,
    pub mode: StepMode,
}

impl StepConfig {
    pub fn new(interval: Interval, probability: f64, mode: StepMode) -> Result<Self, WalkError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(WalkError::new(
                format!("step probability {} outside [0, 1]", probability),
                ErrCode::InvalidArgument,
            ));
        }
        if mode == StepMode::Discrete && interval.integer_bounds().is_none() {
            return Err(WalkError::new(
                format!("discrete steps need integer bounds, got {}", interval),
                ErrCode::InvalidArgument,
            ));
        }
        Ok(Self {
            interval,
            probability,
            mode,
        })
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            interval: Interval::default(),
            probability: 0.5,
            mode: StepMode::Discrete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_probability_validation() {
        let interval = Interval::default();
        assert!(StepConfig::new(interval, 0.0, StepMode::Discrete).is_ok());
        assert!(StepConfig::new(interval, 1.0, StepMode::Discrete).is_ok());
        let err = StepConfig::new(interval, 1.5, StepMode::Discrete).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidArgument);
    }

    #[test]
    fn test_discrete_mode_needs_integer_bounds() {
        let fractional = Interval::new(-0.5, 1.5).unwrap();
        let err = StepConfig::new(fractional, 0.5, StepMode::Discrete).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidArgument);

        // the same interval is fine for continuous sampling
        assert!(StepConfig::new(fractional, 0.5, StepMode::Continuous).is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = StepConfig::default();
        assert_eq!(config.probability, 0.5);
        assert_eq!(config.mode, StepMode::Discrete);
        assert_eq!(config.interval, Interval::default());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(StepMode::from_str("continuous").unwrap(), StepMode::Continuous);
        assert_eq!(StepMode::from_str("discrete").unwrap(), StepMode::Discrete);
        assert_eq!(StepMode::Continuous.to_string(), "continuous");
    }
}
