//! Weight-layer validation helpers — reusable checks for labels and
//! rendering parameters.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used across the visualization
//! stack. These helpers enforce the caller contracts documented in
//! [`crate::weights`]: variable-name counts, threshold fractions, norm
//! orders, and non-degenerate global maxima, so higher-level render and
//! graph constructors can fail fast with structured errors.
//!
//! Key behaviors
//! -------------
//! - Validate variable-name sequences against the tensor's variable count.
//! - Validate threshold fractions (finite, in `(0, 1]`).
//! - Validate L-p norm orders (finite, strictly positive).
//! - Reject identically-zero tensors where thresholding against the global
//!   maximum would divide by zero.
//!
//! Conventions
//! -----------
//! - Validation functions return [`WeightResult`] and never panic on
//!   invalid *inputs*; panics are reserved for programming errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and sequence lengths.
use crate::weights::errors::{WeightError, WeightResult};

/// Validate a variable-name sequence against the tensor's variable count.
///
/// Parameters
/// ----------
/// - `var_names`: `&[String]`
///   Ordered labels establishing the index-to-name correspondence for both
///   the effect and cause axes.
/// - `variables`: `usize`
///   The tensor's variable count (size of each of the first two dimensions).
///
/// Returns
/// -------
/// `WeightResult<()>`
///   - `Ok(())` if `var_names.len() == variables`.
///   - `Err(WeightError::VariableNameMismatch)` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use granger_viz::weights::validation::validate_variable_names;
/// use granger_viz::weights::errors::WeightError;
///
/// let names = vec!["A".to_string(), "B".to_string()];
/// assert!(validate_variable_names(&names, 2).is_ok());
/// assert!(matches!(
///     validate_variable_names(&names, 3),
///     Err(WeightError::VariableNameMismatch { .. })
/// ));
/// ```
pub fn validate_variable_names(var_names: &[String], variables: usize) -> WeightResult<()> {
    if var_names.len() != variables {
        return Err(WeightError::VariableNameMismatch {
            expected: variables,
            actual: var_names.len(),
        });
    }
    Ok(())
}

/// Validate a threshold fraction.
///
/// Parameters
/// ----------
/// - `threshold`: `f64`
///   Fraction of the global norm maximum below which a relationship is
///   treated as absent. Must be finite and in `(0, 1]`.
///
/// Returns
/// -------
/// `WeightResult<f64>`
///   - `Ok(threshold)` if the fraction is finite and in `(0, 1]`.
///   - `Err(WeightError::InvalidThreshold)` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use granger_viz::weights::validation::validate_threshold;
/// use granger_viz::weights::errors::WeightError;
///
/// assert!(validate_threshold(0.1).is_ok());
/// assert!(matches!(
///     validate_threshold(0.0),
///     Err(WeightError::InvalidThreshold { .. })
/// ));
/// ```
pub fn validate_threshold(threshold: f64) -> WeightResult<f64> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(WeightError::InvalidThreshold { value: threshold });
    }
    Ok(threshold)
}

/// Validate an L-p norm order.
///
/// Parameters
/// ----------
/// - `ord`: `f64`
///   Order of the norm used to reduce the lag axis. Must be finite and
///   strictly positive (the default across the crate is `2.0`).
///
/// Returns
/// -------
/// `WeightResult<f64>`
///   - `Ok(ord)` if the order is finite and strictly > 0.
///   - `Err(WeightError::InvalidNormOrder)` otherwise.
///
/// Examples
/// --------
/// ```rust
/// # use granger_viz::weights::validation::validate_norm_order;
/// use granger_viz::weights::errors::WeightError;
///
/// assert!(validate_norm_order(2.0).is_ok());
/// assert!(matches!(
///     validate_norm_order(f64::NAN),
///     Err(WeightError::InvalidNormOrder { .. })
/// ));
/// ```
pub fn validate_norm_order(ord: f64) -> WeightResult<f64> {
    if !ord.is_finite() || ord <= 0.0 {
        return Err(WeightError::InvalidNormOrder { value: ord });
    }
    Ok(ord)
}

/// Validate the global norm maximum ahead of thresholding.
///
/// Parameters
/// ----------
/// - `global_max`: `f64`
///   Largest entry of the norm matrix. An identically-zero tensor yields
///   `0.0`, for which `threshold * global_max` comparisons and relative
///   magnitudes are undefined.
///
/// Returns
/// -------
/// `WeightResult<f64>`
///   - `Ok(global_max)` if strictly positive.
///   - `Err(WeightError::DegenerateTensor)` otherwise.
pub fn validate_global_max(global_max: f64) -> WeightResult<f64> {
    if global_max <= 0.0 {
        return Err(WeightError::DegenerateTensor);
    }
    Ok(global_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::errors::WeightError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Variable-name length validation against the tensor's variable count.
    // - Threshold-fraction domain checks (finiteness, (0, 1] bounds).
    // - Norm-order domain checks (finiteness, positivity).
    // - Degenerate-tensor rejection via the global norm maximum.
    //
    // They intentionally DO NOT cover:
    // - Tensor construction / finiteness checks (covered in `tensor.rs`).
    // - Norm reduction numerics (covered in `norm.rs`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `validate_variable_names` accepts a name sequence whose length matches
    // the tensor's variable count.
    //
    // Given
    // -----
    // - Two names, `variables = 2`.
    //
    // Expect
    // ------
    // - `Ok(())` is returned.
    fn validate_variable_names_with_matching_length_returns_ok() {
        // Arrange
        let names = vec!["A".to_string(), "B".to_string()];

        // Act
        let result = validate_variable_names(&names, 2);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `validate_variable_names` rejects a length mismatch with
    // VariableNameMismatch carrying both lengths.
    //
    // Given
    // -----
    // - Two names, `variables = 3`.
    //
    // Expect
    // ------
    // - `Err(WeightError::VariableNameMismatch { expected: 3, actual: 2 })`.
    fn validate_variable_names_with_length_mismatch_returns_error() {
        // Arrange
        let names = vec!["A".to_string(), "B".to_string()];

        // Act
        let result = validate_variable_names(&names, 3);

        // Assert
        match result {
            Err(WeightError::VariableNameMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected VariableNameMismatch error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_threshold` accepts finite fractions in (0, 1].
    //
    // Given
    // -----
    // - Representative valid thresholds: 0.1 (the default), 1.0 (boundary).
    //
    // Expect
    // ------
    // - `Ok(threshold)` for each.
    fn validate_threshold_with_valid_fractions_returns_ok() {
        // Arrange
        let valid = [0.1_f64, 0.5_f64, 1.0_f64];

        // Act & Assert
        for &threshold in &valid {
            let result = validate_threshold(threshold);
            assert_eq!(result, Ok(threshold));
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_threshold` rejects zero, negative, above-one, and non-finite
    // fractions with InvalidThreshold.
    //
    // Given
    // -----
    // - A set of invalid thresholds (0.0, -0.1, 1.5, NaN, ±∞).
    //
    // Expect
    // ------
    // - `Err(WeightError::InvalidThreshold { .. })` for each input.
    fn validate_threshold_with_invalid_fractions_returns_error() {
        // Arrange
        let invalid = [0.0_f64, -0.1_f64, 1.5_f64, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

        // Act & Assert
        for &threshold in &invalid {
            let result = validate_threshold(threshold);
            match result {
                Err(WeightError::InvalidThreshold { value }) => {
                    if threshold.is_nan() {
                        assert!(value.is_nan());
                    } else {
                        assert_eq!(value, threshold);
                    }
                }
                other => panic!("expected InvalidThreshold for {threshold:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_norm_order` accepts finite, strictly positive orders.
    //
    // Given
    // -----
    // - Orders 1.0 and 2.0.
    //
    // Expect
    // ------
    // - `Ok(ord)` for each.
    fn validate_norm_order_with_positive_finite_returns_ok() {
        // Arrange
        let valid = [1.0_f64, 2.0_f64];

        // Act & Assert
        for &ord in &valid {
            assert_eq!(validate_norm_order(ord), Ok(ord));
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_norm_order` rejects non-positive and non-finite orders.
    //
    // Given
    // -----
    // - Orders 0.0, -2.0, NaN, ±∞.
    //
    // Expect
    // ------
    // - `Err(WeightError::InvalidNormOrder { .. })` for each input.
    fn validate_norm_order_with_invalid_values_returns_error() {
        // Arrange
        let invalid = [0.0_f64, -2.0_f64, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

        // Act & Assert
        for &ord in &invalid {
            let result = validate_norm_order(ord);
            match result {
                Err(WeightError::InvalidNormOrder { value }) => {
                    if ord.is_nan() {
                        assert!(value.is_nan());
                    } else {
                        assert_eq!(value, ord);
                    }
                }
                other => panic!("expected InvalidNormOrder for {ord:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_global_max` accepts strictly positive maxima and rejects a
    // zero maximum with DegenerateTensor.
    //
    // Given
    // -----
    // - `global_max = 5.0` and `global_max = 0.0`.
    //
    // Expect
    // ------
    // - `Ok(5.0)` and `Err(WeightError::DegenerateTensor)` respectively.
    fn validate_global_max_distinguishes_positive_from_degenerate() {
        // Arrange
        let positive = 5.0_f64;
        let degenerate = 0.0_f64;

        // Act & Assert
        assert_eq!(validate_global_max(positive), Ok(positive));
        assert_eq!(validate_global_max(degenerate), Err(WeightError::DegenerateTensor));
    }
}
