//! # samplekit-source
//!
//! **Tier 1 (Sample Provider)**
//!
//! Seedable pseudo-random numeric sequences for harness runs. All
//! distribution math is delegated to `rand_distr`; this crate only fixes
//! the provider surface: a spec enum, a seeded source, and parameter
//! validation.
//!
//! ## What belongs here
//! * The `Distribution` spec enum and `PseudoRandomSource`
//! * Parameter rejection (`SourceError`)
//!
//! ## What does NOT belong here
//! * Descriptive statistics (see `samplekit-math`)
//! * Process-global generator state: every source owns its RNG, and
//!   nothing here reads or reseeds a shared generator.

#![forbid(unsafe_code)]

use rand::distributions::{Bernoulli, Distribution as _, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;
use thiserror::Error;

/// Errors from rejected distribution parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("invalid {name}: {detail}")]
    InvalidParameter { name: &'static str, detail: String },
}

/// Specification of a distribution to draw from.
///
/// Bernoulli draws are emitted as `0.0` / `1.0` so every distribution
/// feeds the same `Vec<f64>` pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Normal { mean: f64, std_dev: f64 },
    Uniform { low: f64, high: f64 },
    Bernoulli { p: f64 },
}

/// A deterministic, seedable sample provider backed by `StdRng`.
///
/// The source owns its generator; two sources with the same seed produce
/// identical draw sequences.
#[derive(Debug, Clone)]
pub struct PseudoRandomSource {
    rng: StdRng,
}

impl PseudoRandomSource {
    /// Source with a fixed seed for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` observations from `spec`.
    ///
    /// Parameters are validated before any draw: a non-finite or negative
    /// standard deviation, an empty or unordered uniform range, and a
    /// Bernoulli probability outside [0, 1] are all rejected.
    pub fn draw(&mut self, spec: Distribution, count: usize) -> Result<Vec<f64>, SourceError> {
        match spec {
            Distribution::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev).map_err(|_| {
                    SourceError::InvalidParameter {
                        name: "std_dev",
                        detail: format!("{std_dev} must be a non-negative finite number"),
                    }
                })?;
                Ok((0..count).map(|_| dist.sample(&mut self.rng)).collect())
            }
            Distribution::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(SourceError::InvalidParameter {
                        name: "range",
                        detail: format!("low {low} must be a finite number below high {high}"),
                    });
                }
                let dist = Uniform::new(low, high);
                Ok((0..count).map(|_| dist.sample(&mut self.rng)).collect())
            }
            Distribution::Bernoulli { p } => {
                let dist = Bernoulli::new(p).map_err(|_| SourceError::InvalidParameter {
                    name: "p",
                    detail: format!("{p} must lie in [0, 1]"),
                })?;
                Ok((0..count)
                    .map(|_| if dist.sample(&mut self.rng) { 1.0 } else { 0.0 })
                    .collect())
            }
        }
    }
}
