//! L-p norm reduction of the lag axis into an effect × cause norm matrix.
//!
//! Purpose
//! -------
//! Collapse a [`WeightTensor`]'s lag axis into one magnitude per
//! `(effect, cause)` pair via an L-p norm, producing the derived norm
//! matrix every render and graph operation works from. The matrix is
//! recomputed on each call and never persisted.
//!
//! Conventions
//! -----------
//! - `norm[(effect, cause)] = (Σ_lag |w|^p)^(1/p)` with `p` finite and > 0.
//! - The default order across the crate is `DEFAULT_NORM_ORDER = 2.0`.
//! - Since [`WeightTensor`] guarantees finite entries, the reduction itself
//!   cannot produce NaNs; only the order is validated here.
use ndarray::{Array2, ArrayView1, Axis};

use crate::weights::{
    errors::WeightResult, tensor::WeightTensor, validation::validate_norm_order,
};

/// Default norm order used by the rendering layer when none is supplied.
pub const DEFAULT_NORM_ORDER: f64 = 2.0;

/// Reduce the lag axis of `tensor` via an L-p norm.
///
/// Parameters
/// ----------
/// - `tensor`: `&WeightTensor`
///   Validated `(effect, cause, lag)` weight tensor.
/// - `ord`: `f64`
///   Norm order `p`; must be finite and strictly positive.
///
/// Returns
/// -------
/// `WeightResult<Array2<f64>>`
///   - `Ok(matrix)` of shape `(effects, causes)` on success.
///   - `Err(WeightError::InvalidNormOrder)` if `ord` is out of domain.
///
/// Examples
/// --------
/// ```rust
/// # use granger_viz::weights::tensor::WeightTensor;
/// # use granger_viz::weights::norm::norm_matrix;
/// use ndarray::array;
///
/// let tensor = WeightTensor::new(array![[[3.0, 4.0]]]).unwrap();
/// let norm = norm_matrix(&tensor, 2.0).unwrap();
/// assert!((norm[[0, 0]] - 5.0).abs() < 1e-12);
/// ```
pub fn norm_matrix(tensor: &WeightTensor, ord: f64) -> WeightResult<Array2<f64>> {
    validate_norm_order(ord)?;
    Ok(tensor.values().map_axis(Axis(2), |lane| lp_norm(lane, ord)))
}

/// Largest entry of a norm matrix, or `0.0` for an empty matrix.
///
/// Entries are norms and therefore non-negative, so a plain fold against
/// `0.0` is exact.
pub fn global_max(norm: &Array2<f64>) -> f64 {
    norm.iter().fold(0.0_f64, |acc, &v| acc.max(v))
}

/// L-p norm of a single lag lane. `ord` must already be validated.
fn lp_norm(lane: ArrayView1<'_, f64>, ord: f64) -> f64 {
    lane.iter().map(|v| v.abs().powf(ord)).sum::<f64>().powf(1.0 / ord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::errors::WeightError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - L2 and L1 reductions against hand-computed values.
    // - Sign handling (norms of negative weights are positive).
    // - Rejection of invalid norm orders.
    // - Global-maximum extraction.
    //
    // They intentionally DO NOT cover:
    // - Tensor construction invariants (covered in `tensor.rs`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `norm_matrix` with the default L2 order matches hand-computed
    // Euclidean norms per (effect, cause) pair.
    //
    // Given
    // -----
    // - A 2 x 2 x 2 tensor with lag lanes [3, 4], [0, 0], [-6, 8], [1, 0].
    //
    // Expect
    // ------
    // - Norm matrix [[5, 0], [10, 1]].
    fn norm_matrix_with_l2_order_matches_euclidean_norms() {
        // Arrange
        let tensor = WeightTensor::new(array![
            [[3.0, 4.0], [0.0, 0.0]],
            [[-6.0, 8.0], [1.0, 0.0]],
        ])
        .expect("tensor should be valid");

        // Act
        let norm = norm_matrix(&tensor, DEFAULT_NORM_ORDER).expect("norm should succeed");

        // Assert
        let expected = array![[5.0, 0.0], [10.0, 1.0]];
        for (index, &value) in norm.indexed_iter() {
            assert!(
                (value - expected[index]).abs() < 1e-12,
                "norm at {index:?} was {value}, expected {}",
                expected[index]
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // `norm_matrix` with order 1 sums absolute weights over the lag axis.
    //
    // Given
    // -----
    // - A 1 x 1 x 3 tensor with lane [1, -2, 3].
    //
    // Expect
    // ------
    // - Norm matrix [[6]].
    fn norm_matrix_with_l1_order_sums_absolute_values() {
        // Arrange
        let tensor = WeightTensor::new(array![[[1.0, -2.0, 3.0]]]).expect("tensor should be valid");

        // Act
        let norm = norm_matrix(&tensor, 1.0).expect("norm should succeed");

        // Assert
        assert!((norm[[0, 0]] - 6.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // `norm_matrix` rejects non-positive and non-finite orders.
    //
    // Given
    // -----
    // - A valid tensor and `ord = 0.0`.
    //
    // Expect
    // ------
    // - `Err(WeightError::InvalidNormOrder { value: 0.0 })`.
    fn norm_matrix_with_invalid_order_returns_error() {
        // Arrange
        let tensor = WeightTensor::new(array![[[1.0]]]).expect("tensor should be valid");

        // Act
        let result = norm_matrix(&tensor, 0.0);

        // Assert
        assert_eq!(result, Err(WeightError::InvalidNormOrder { value: 0.0 }));
    }

    #[test]
    // Purpose
    // -------
    // `global_max` returns the largest norm entry and 0.0 for an all-zero
    // matrix.
    //
    // Given
    // -----
    // - Norm matrices [[5, 0], [10, 1]] and [[0, 0], [0, 0]].
    //
    // Expect
    // ------
    // - 10.0 and 0.0 respectively.
    fn global_max_returns_largest_entry() {
        // Arrange
        let norm = array![[5.0, 0.0], [10.0, 1.0]];
        let zeros = array![[0.0, 0.0], [0.0, 0.0]];

        // Act & Assert
        assert_eq!(global_max(&norm), 10.0);
        assert_eq!(global_max(&zeros), 0.0);
    }
}
