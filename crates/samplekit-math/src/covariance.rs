//! Sample covariance and the 2x2 covariance matrix.

use samplekit_types::CovarianceMatrix;

use crate::describe::{sample_mean, sample_variance};
use crate::error::StatError;

/// Unbiased sample covariance of two equal-length samples.
///
/// `Cov(X, Y) = sum((x_i - mean(x)) * (y_i - mean(y))) / (n - 1)`.
/// The length check runs before the size check, so mismatched inputs
/// always surface as [`StatError::LengthMismatch`].
pub fn sample_covariance(x: &[f64], y: &[f64]) -> Result<f64, StatError> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatError::InsufficientData { min: 2, got: n });
    }
    let mean_x = sample_mean(x)?;
    let mean_y = sample_mean(y)?;
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    Ok(sum / (n - 1) as f64)
}

/// 2x2 covariance matrix of two equal-length samples.
///
/// Diagonal entries are the sample variances; the off-diagonal entry is
/// computed once, so the matrix is symmetric by construction.
pub fn covariance_matrix(x: &[f64], y: &[f64]) -> Result<CovarianceMatrix, StatError> {
    let cov_xy = sample_covariance(x, y)?;
    Ok(CovarianceMatrix {
        var_x: sample_variance(x)?,
        var_y: sample_variance(y)?,
        cov_xy,
    })
}
