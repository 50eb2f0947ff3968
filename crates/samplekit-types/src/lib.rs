//! # samplekit-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `samplekit`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (order statistics, covariance matrix, receipts)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Numeric computation

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Five-number summary of a sample.
///
/// For finite input the fields satisfy `min <= q1 <= median <= q3 <= max`;
/// equality is expected for small or repeated-value samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatistics {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

impl OrderStatistics {
    /// Positional form `(min, max, median, q1, q3)` for callers that unpack.
    #[must_use]
    pub fn into_tuple(self) -> (f64, f64, f64, f64, f64) {
        (self.min, self.max, self.median, self.q1, self.q3)
    }
}

impl From<OrderStatistics> for (f64, f64, f64, f64, f64) {
    fn from(stats: OrderStatistics) -> Self {
        stats.into_tuple()
    }
}

/// Symmetric 2x2 covariance matrix for two equal-length samples.
///
/// The off-diagonal value is stored once, so `get(0, 1)` and `get(1, 0)`
/// return the same computed value rather than two independently rounded
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CovarianceMatrix {
    pub var_x: f64,
    pub var_y: f64,
    pub cov_xy: f64,
}

impl CovarianceMatrix {
    /// Matrix dimensions, always `(2, 2)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (2, 2)
    }

    /// Entry at `(row, col)`, or `None` outside the 2x2 range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        match (row, col) {
            (0, 0) => Some(self.var_x),
            (1, 1) => Some(self.var_y),
            (0, 1) | (1, 0) => Some(self.cov_xy),
            _ => None,
        }
    }

    /// Row-major dense form.
    #[must_use]
    pub fn to_rows(&self) -> [[f64; 2]; 2] {
        [[self.var_x, self.cov_xy], [self.cov_xy, self.var_y]]
    }
}

/// Versioned JSON artifact summarizing one sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub len: usize,
    pub mean: f64,
    /// Absent below two observations.
    pub variance: Option<f64>,
    /// Absent below two observations.
    pub std_dev: Option<f64>,
    pub order: OrderStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_statistics_tuple_is_positional() {
        let stats = OrderStatistics {
            min: 1.0,
            max: 5.0,
            median: 3.0,
            q1: 2.0,
            q3: 4.0,
        };
        let (min, max, median, q1, q3) = stats.into_tuple();
        assert_eq!(min, 1.0);
        assert_eq!(max, 5.0);
        assert_eq!(median, 3.0);
        assert_eq!(q1, 2.0);
        assert_eq!(q3, 4.0);
    }

    #[test]
    fn covariance_matrix_shape_is_two_by_two() {
        let matrix = CovarianceMatrix {
            var_x: 1.0,
            var_y: 4.0,
            cov_xy: 2.0,
        };
        assert_eq!(matrix.shape(), (2, 2));
    }

    #[test]
    fn covariance_matrix_off_diagonal_entries_are_identical() {
        let matrix = CovarianceMatrix {
            var_x: 1.0,
            var_y: 4.0,
            cov_xy: 2.0,
        };
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        let rows = matrix.to_rows();
        assert_eq!(rows[0][1].to_bits(), rows[1][0].to_bits());
    }

    #[test]
    fn covariance_matrix_get_rejects_out_of_range_indices() {
        let matrix = CovarianceMatrix {
            var_x: 1.0,
            var_y: 4.0,
            cov_xy: 2.0,
        };
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);
    }

    #[test]
    fn summary_receipt_serializes_optional_fields_as_null() {
        let receipt = SummaryReceipt {
            schema_version: SCHEMA_VERSION,
            generated_at_ms: 0,
            len: 1,
            mean: 42.0,
            variance: None,
            std_dev: None,
            order: OrderStatistics {
                min: 42.0,
                max: 42.0,
                median: 42.0,
                q1: 42.0,
                q3: 42.0,
            },
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["schema_version"], SCHEMA_VERSION);
        assert_eq!(json["variance"], serde_json::Value::Null);
        assert_eq!(json["order"]["median"], 42.0);
    }
}
