use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal cumulative distribution function
pub fn standard_normal_cdf(value: f64) -> f64 {
    Normal::new(0.0, 1.0).unwrap().cdf(value)
}
