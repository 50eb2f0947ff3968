use proptest::prelude::*;
use samplekit_types::{CovarianceMatrix, OrderStatistics};

proptest! {
    #[test]
    fn tuple_conversion_preserves_field_order(
        min in -1e9f64..1e9,
        max in -1e9f64..1e9,
        median in -1e9f64..1e9,
        q1 in -1e9f64..1e9,
        q3 in -1e9f64..1e9,
    ) {
        let stats = OrderStatistics { min, max, median, q1, q3 };
        let tuple: (f64, f64, f64, f64, f64) = stats.into();
        prop_assert_eq!(tuple, (min, max, median, q1, q3));
    }

    #[test]
    fn matrix_is_symmetric_for_any_stored_values(
        var_x in -1e9f64..1e9,
        var_y in -1e9f64..1e9,
        cov_xy in -1e9f64..1e9,
    ) {
        let matrix = CovarianceMatrix { var_x, var_y, cov_xy };
        prop_assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        let rows = matrix.to_rows();
        prop_assert_eq!(rows[0][1].to_bits(), rows[1][0].to_bits());
    }

    #[test]
    fn matrix_diagonal_holds_variances(
        var_x in -1e9f64..1e9,
        var_y in -1e9f64..1e9,
        cov_xy in -1e9f64..1e9,
    ) {
        let matrix = CovarianceMatrix { var_x, var_y, cov_xy };
        prop_assert_eq!(matrix.get(0, 0), Some(var_x));
        prop_assert_eq!(matrix.get(1, 1), Some(var_y));
    }

    #[test]
    fn matrix_get_outside_shape_is_none(
        row in 2usize..100,
        col in 0usize..100,
    ) {
        let matrix = CovarianceMatrix { var_x: 0.0, var_y: 0.0, cov_xy: 0.0 };
        prop_assert_eq!(matrix.get(row, col), None);
        prop_assert_eq!(matrix.get(col.max(2), row), None);
    }

    #[test]
    fn order_statistics_roundtrips_through_json(
        min in -1e6f64..1e6,
        spread in 0.0f64..1e6,
    ) {
        let stats = OrderStatistics {
            min,
            max: min + spread,
            median: min + spread / 2.0,
            q1: min + spread / 4.0,
            q3: min + 3.0 * spread / 4.0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: OrderStatistics = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, stats);
    }
}
