use crate::errors::FairlensError;

/// Validate that an input array matches the population size.
pub fn validate_same_length(parameter: &str, expected: usize, actual: usize) -> Result<(), FairlensError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FairlensError::ShapeMismatch(parameter.to_string(), expected, actual))
    }
}

/// Validate that a tolerance is usable for drift comparison.
pub fn validate_tolerance(value: f64) -> Result<(), FairlensError> {
    if value.is_nan() || value < 0.0 {
        Err(FairlensError::InvalidTolerance(value))
    } else {
        Ok(())
    }
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = 10_f64.powi(precision);
    (n * p).round() / p
}
