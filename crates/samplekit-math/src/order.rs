//! Order statistics and R-7 quantiles.
//!
//! Quantiles use the R-7 linear-interpolation convention (`h = (n-1)p`,
//! interpolate between the elements at `floor(h)` and `floor(h) + 1`),
//! the default in R, NumPy, and Excel. The convention is fixed here
//! because the different small-n conventions disagree.

use samplekit_types::OrderStatistics;

use crate::error::StatError;

/// The `p`-th quantile of an unsorted sample, R-7 convention.
///
/// Sorts a copy of the input; use [`quantile_sorted`] when computing
/// several quantiles from the same sample.
pub fn quantile(data: &[f64], p: f64) -> Result<f64, StatError> {
    if data.is_empty() {
        return Err(StatError::EmptyInput);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(StatError::InvalidQuantile { p });
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(quantile_sorted(&sorted, p))
}

/// The `p`-th quantile of an ascending-sorted, non-empty sample.
///
/// Contract: `sorted` is non-empty and ascending, `p` lies in [0, 1].
#[must_use]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&p));
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}

/// Five-number summary of a non-empty sample.
///
/// Min and max are the sorted extremes. The median is the middle element
/// for odd n, the mean of the two middle elements for even n (this
/// coincides with the R-7 quantile at p = 0.5). Q1 and Q3 are the R-7
/// quantiles at 0.25 and 0.75.
pub fn order_statistics(data: &[f64]) -> Result<OrderStatistics, StatError> {
    if data.is_empty() {
        return Err(StatError::EmptyInput);
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };
    Ok(OrderStatistics {
        min: sorted[0],
        max: sorted[n - 1],
        median,
        q1: quantile_sorted(&sorted, 0.25),
        q3: quantile_sorted(&sorted, 0.75),
    })
}
