use crate::common::walk_exception::{ErrCode, WalkError};

/// Ordinary least squares fit, returns (slope, intercept) for y = slope*x + intercept.
///
/// A degenerate x axis (zero denominator) falls back to a horizontal line
/// at the mean of y.
pub fn least_squares_fit(x: &[f64], y: &[f64]) -> Result<(f64, f64), WalkError> {
    if x.is_empty() || y.is_empty() {
        return Err(WalkError::new(
            "regression inputs must be non-empty",
            ErrCode::EmptyInput,
        ));
    }
    if x.len() != y.len() {
        return Err(WalkError::new(
            format!("regression axis lengths differ: {} vs {}", x.len(), y.len()),
            ErrCode::InvalidArgument,
        ));
    }

    let n = x.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = x.iter().zip(y.iter()).fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (&xi, &yi)| (sx + xi, sy + yi, sxy + xi * yi, sx2 + xi * xi),
    );

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return Ok((0.0, sum_y / n));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok((slope, intercept))
}

/// Fitted Y values of the least squares line: intercept + slope * x
pub fn fitted_values(x: &[f64], y: &[f64]) -> Result<Vec<f64>, WalkError> {
    let (slope, intercept) = least_squares_fit(x, y)?;
    Ok(x.iter().map(|&xi| intercept + slope * xi).collect())
}
