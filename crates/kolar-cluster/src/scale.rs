//! Column-wise standardization of the feature matrix.
//!
//! The configured features carry incompatible scales (market capitalization
//! in crores next to dividend yields in percent). Unscaled, the
//! highest-magnitude columns would dominate the Euclidean geometry of the
//! clustering stage, so every column is centered and divided by its
//! population standard deviation before partitioning.

use kolar_traits::stats::MIN_STD_THRESHOLD;
use ndarray::{ArrayView2, Array2, Axis};

/// Standardize each column of `data` to zero mean and unit variance.
///
/// Uses the population standard deviation (N denominator). A column whose
/// standard deviation falls below [`MIN_STD_THRESHOLD`] is mapped to zeros
/// instead of dividing by a near-zero value.
pub fn standardize_matrix(data: ArrayView2<'_, f64>) -> Array2<f64> {
    let mut scaled = data.to_owned();
    for mut column in scaled.axis_iter_mut(Axis(1)) {
        let n = column.len() as f64;
        if n == 0.0 {
            continue;
        }
        let mean = column.sum() / n;
        let variance = column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        if std > MIN_STD_THRESHOLD {
            column.mapv_inplace(|x| (x - mean) / std);
        } else {
            column.fill(0.0);
        }
    }
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_standardize_matrix_basic() {
        let data = array![[1.0, 100.0], [2.0, 200.0], [3.0, 300.0]];
        let scaled = standardize_matrix(data.view());

        // Each column: mean 0, population std 1.
        for j in 0..2 {
            let column = scaled.column(j);
            let mean = column.sum() / column.len() as f64;
            let variance =
                column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / column.len() as f64;
            assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
            assert_relative_eq!(variance, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_standardize_removes_scale_dominance() {
        // Two columns with wildly different magnitudes end up comparable.
        let data = array![[1.0, 1e9], [2.0, 2e9], [3.0, 3e9]];
        let scaled = standardize_matrix(data.view());
        for i in 0..3 {
            assert_relative_eq!(scaled[[i, 0]], scaled[[i, 1]], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_standardize_constant_column_becomes_zero() {
        let data = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let scaled = standardize_matrix(data.view());
        assert!(scaled.column(0).iter().all(|&x| x == 0.0));
        assert!(scaled.column(1).iter().any(|&x| x != 0.0));
    }

    #[test]
    fn test_standardize_empty_matrix() {
        let data = Array2::<f64>::zeros((0, 3));
        let scaled = standardize_matrix(data.view());
        assert_eq!(scaled.nrows(), 0);
        assert_eq!(scaled.ncols(), 3);
    }
}
