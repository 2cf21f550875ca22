use crate::common::walk_exception::{ErrCode, WalkError};

/// Default X axis for plotting: 1, 2, ..., size
pub fn index_sequence(size: usize) -> Vec<usize> {
    (1..=size).collect()
}

/// Arithmetic mean of the samples
pub fn mean(samples: &[f64]) -> Result<f64, WalkError> {
    if samples.is_empty() {
        return Err(WalkError::new(
            "cannot take the mean of an empty sample set",
            ErrCode::EmptyInput,
        ));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Unbiased sample variance. Fewer than two samples have no dispersion
/// by convention, so the result is 0 rather than an error.
pub fn sample_variance(samples: &[f64]) -> f64 {
    let size = samples.len();
    if size < 2 {
        return 0.0;
    }

    let mean = samples.iter().sum::<f64>() / size as f64;
    let squared_deviations = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    squared_deviations / (size - 1) as f64
}

/// Sample standard deviation
pub fn standard_deviation(samples: &[f64]) -> f64 {
    sample_variance(samples).sqrt()
}
