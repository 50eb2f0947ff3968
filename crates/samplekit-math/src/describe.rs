//! Mean, variance, and standard deviation.

use crate::error::StatError;

/// Arithmetic mean of a non-empty sample.
pub fn sample_mean(data: &[f64]) -> Result<f64, StatError> {
    if data.is_empty() {
        return Err(StatError::EmptyInput);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance with Bessel's correction (n - 1 denominator).
///
/// Two-pass: the mean first, then the sum of squared deviations. The
/// population estimator (n denominator) is deliberately not offered;
/// callers wanting it can rescale.
pub fn sample_variance(data: &[f64]) -> Result<f64, StatError> {
    let n = data.len();
    if n < 2 {
        return Err(StatError::InsufficientData { min: 2, got: n });
    }
    let mean = sample_mean(data)?;
    let sum_sq: f64 = data
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation, `sqrt` of [`sample_variance`].
pub fn sample_std_dev(data: &[f64]) -> Result<f64, StatError> {
    sample_variance(data).map(f64::sqrt)
}
