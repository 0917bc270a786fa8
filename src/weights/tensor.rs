//! Validated weight-tensor container for causal-inference results.
//!
//! Purpose
//! -------
//! Wrap the dense `(effect, cause, lag)` weight array produced by an
//! upstream modeling component in a validated, read-only container. All
//! downstream consumers (norm reduction, autocorrelation detection,
//! heatmap and graph rendering) take a [`WeightTensor`] and can therefore
//! assume a square variable set, a non-empty lag axis, and finite entries.
//!
//! Key behaviors
//! -------------
//! - Validate shape and content once at construction; reject empty variable
//!   sets, missing lag axes, non-square effect×cause dimensions, and
//!   non-finite entries with structured [`WeightError`]s.
//! - Expose read-only views of the underlying array plus the variable and
//!   lag counts.
//!
//! Invariants & assumptions
//! ------------------------
//! - `values.dim() = (p, p, k)` with `p > 0` and `k > 0`.
//! - Every entry is finite.
//! - The tensor is immutable once produced upstream; this crate only reads
//!   it. Construction clones nothing — the caller moves the array in.
//!
//! Conventions
//! -----------
//! - Axis 0 indexes the **effect** variable (the variable being predicted),
//!   axis 1 the **cause** variable, axis 2 the time **lag**. Indices are
//!   0-based throughout and lag index `j` denotes lag `j + 1`.
use ndarray::{Array3, ArrayView3, Axis};

use crate::weights::errors::{WeightError, WeightResult};

/// A validated `(effect, cause, lag)` weight tensor.
///
/// Invariants: first two dimensions are equal and non-zero, the lag axis is
/// non-empty, and every entry is finite. Constructed via
/// [`WeightTensor::new`]; all accessors are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTensor {
    values: Array3<f64>,
}

impl WeightTensor {
    /// Construct a [`WeightTensor`] and validate the documented invariants.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `Array3<f64>`
    ///   Dense weight array of shape `(effects, causes, lags)`. Ownership is
    ///   moved into the container; no copy is made.
    ///
    /// Returns
    /// -------
    /// `WeightResult<WeightTensor>`
    ///   - `Ok(tensor)` if the array is square over `(effect, cause)`, has at
    ///     least one variable and one lag, and contains only finite entries.
    ///   - `Err(WeightError)` describing the first violation encountered.
    ///
    /// Errors
    /// ------
    /// - `WeightError::EmptyTensor` if the first dimension is zero.
    /// - `WeightError::NonSquareTensor` if `effects != causes`.
    /// - `WeightError::EmptyLagAxis` if the lag axis is empty.
    /// - `WeightError::NonFiniteWeight` for the first NaN / ±∞ entry, with
    ///   its `(effect, cause, lag)` index and value.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use granger_viz::weights::tensor::WeightTensor;
    /// use granger_viz::weights::errors::WeightError;
    /// use ndarray::Array3;
    ///
    /// let values = Array3::<f64>::zeros((2, 2, 3));
    /// assert!(WeightTensor::new(values).is_ok());
    ///
    /// let non_square = Array3::<f64>::zeros((2, 3, 1));
    /// assert!(matches!(
    ///     WeightTensor::new(non_square),
    ///     Err(WeightError::NonSquareTensor { .. })
    /// ));
    /// ```
    pub fn new(values: Array3<f64>) -> WeightResult<Self> {
        let (effects, causes, lags) = values.dim();
        if effects == 0 {
            return Err(WeightError::EmptyTensor);
        }
        if effects != causes {
            return Err(WeightError::NonSquareTensor { effects, causes });
        }
        if lags == 0 {
            return Err(WeightError::EmptyLagAxis { variables: effects });
        }
        for ((effect, cause, lag), &value) in values.indexed_iter() {
            if !value.is_finite() {
                return Err(WeightError::NonFiniteWeight { effect, cause, lag, value });
            }
        }
        Ok(WeightTensor { values })
    }

    /// Number of variables `p` (size of the effect and cause axes).
    pub fn num_variables(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    /// Number of time lags `k` (size of the lag axis).
    pub fn num_lags(&self) -> usize {
        self.values.len_of(Axis(2))
    }

    /// Read-only view of the underlying `(effect, cause, lag)` array.
    pub fn values(&self) -> ArrayView3<'_, f64> {
        self.values.view()
    }
}
