use crate::common::walk_exception::{ErrCode, WalkError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Real-valued range parametrizing the magnitude of a walk step.
/// Immutable after construction; bounds are individually inclusive or
/// exclusive, both inclusive by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lower_bound: f64,
    upper_bound: f64,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl Interval {
    /// Closed interval [lower_bound, upper_bound]
    pub fn new(lower_bound: f64, upper_bound: f64) -> Result<Self, WalkError> {
        Self::with_inclusivity(lower_bound, upper_bound, true, true)
    }

    pub fn with_inclusivity(
        lower_bound: f64,
        upper_bound: f64,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Result<Self, WalkError> {
        if lower_bound > upper_bound {
            return Err(WalkError::new(
                format!(
                    "interval lower bound {} exceeds upper bound {}",
                    lower_bound, upper_bound
                ),
                ErrCode::InvalidArgument,
            ));
        }
        Ok(Self {
            lower_bound,
            upper_bound,
            lower_inclusive,
            upper_inclusive,
        })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// Effective inclusive integer endpoints for discrete sampling, or None
    /// if either bound is not an integer. Exclusive flags tighten the
    /// corresponding endpoint by one.
    pub fn integer_bounds(&self) -> Option<(i64, i64)> {
        if self.lower_bound.fract() != 0.0 || self.upper_bound.fract() != 0.0 {
            return None;
        }
        let mut lower = self.lower_bound as i64;
        let mut upper = self.upper_bound as i64;
        if !self.lower_inclusive {
            lower += 1;
        }
        if !self.upper_inclusive {
            upper -= 1;
        }
        if lower > upper {
            return None;
        }
        Some((lower, upper))
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            lower_bound: -1.0,
            upper_bound: 1.0,
            lower_inclusive: true,
            upper_inclusive: true,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(
            f,
            "Interval {}{}, {}{}",
            open, self.lower_bound, self.upper_bound, close
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let err = Interval::new(2.0, 1.0).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidArgument);
    }

    #[test]
    fn test_accessors() {
        let interval = Interval::new(-4.56, 5.88).unwrap();
        assert_eq!(interval.lower_bound(), -4.56);
        assert_eq!(interval.upper_bound(), 5.88);
        assert!(interval.lower_inclusive());
        assert!(interval.upper_inclusive());
    }

    #[test]
    fn test_default_is_unit_band() {
        let interval = Interval::default();
        assert_eq!(interval.lower_bound(), -1.0);
        assert_eq!(interval.upper_bound(), 1.0);
    }

    #[test]
    fn test_integer_bounds() {
        let interval = Interval::new(-2.0, 3.0).unwrap();
        assert_eq!(interval.integer_bounds(), Some((-2, 3)));

        let fractional = Interval::new(0.5, 3.0).unwrap();
        assert_eq!(fractional.integer_bounds(), None);
    }

    #[test]
    fn test_integer_bounds_respect_exclusivity() {
        let interval = Interval::with_inclusivity(0.0, 3.0, false, false).unwrap();
        assert_eq!(interval.integer_bounds(), Some((1, 2)));

        // exclusivity can empty the integer range
        let empty = Interval::with_inclusivity(1.0, 1.0, false, true).unwrap();
        assert_eq!(empty.integer_bounds(), None);
    }

    #[test]
    fn test_display() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        assert_eq!(interval.to_string(), "Interval [-1, 1]");
        let half_open = Interval::with_inclusivity(0.0, 2.0, true, false).unwrap();
        assert_eq!(half_open.to_string(), "Interval [0, 2)");
    }
}
