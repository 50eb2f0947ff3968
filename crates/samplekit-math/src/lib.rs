//! # samplekit-math
//!
//! **Tier 1 (Numeric Core)**
//!
//! Deterministic descriptive statistics over `&[f64]` samples.
//!
//! ## What belongs here
//! * Mean, variance, and standard deviation (unbiased estimators)
//! * Order statistics (min, max, median, quartiles) and R-7 quantiles
//! * Sample covariance and the 2x2 covariance matrix
//! * The `StatError` taxonomy
//!
//! ## What does NOT belong here
//! * Random sampling (see `samplekit-source`)
//! * I/O, reporting, or CLI concerns (see `samplekit`)
//!
//! Every operation is a pure, stateless function of its inputs: no shared
//! state, no I/O, safe to call from any number of threads. Worst case is
//! O(n log n) for the sorting operations.
//!
//! Non-finite values are the caller's responsibility. Arithmetic
//! propagates them (NaN in, NaN out) and sorting uses IEEE total order,
//! which places NaN after every finite value. The error taxonomy covers
//! structural misuse only.

#![forbid(unsafe_code)]

mod covariance;
mod describe;
mod error;
mod order;

pub use covariance::{covariance_matrix, sample_covariance};
pub use describe::{sample_mean, sample_std_dev, sample_variance};
pub use error::StatError;
pub use order::{order_statistics, quantile, quantile_sorted};

pub use samplekit_types::{CovarianceMatrix, OrderStatistics};
