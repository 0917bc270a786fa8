//! Autocorrelation detection — does any variable cause itself at some lag?
//!
//! The detector reduces the lag axis with an L2 norm and reports whether any
//! diagonal entry (effect index equal to cause index) is non-zero. The
//! result drives the default causal-graph layout: variable sets without
//! self-loops render more cleanly in a circular arrangement.

use ndarray::Axis;

use crate::weights::tensor::WeightTensor;

/// Report whether `tensor` contains any self-relationship.
///
/// Returns `true` unless every diagonal entry of the L2 norm matrix is
/// exactly zero. The L2 reduction is fixed here regardless of the norm
/// order used for rendering, matching the detector's contract.
///
/// Examples
/// --------
/// ```rust
/// # use granger_viz::weights::tensor::WeightTensor;
/// # use granger_viz::weights::autocorrelation::has_autocorrelation;
/// use ndarray::array;
///
/// // Off-diagonal weight only: B causes A, nothing causes itself.
/// let cross = WeightTensor::new(array![[[0.0], [5.0]], [[0.0], [0.0]]]).unwrap();
/// assert!(!has_autocorrelation(&cross));
///
/// // A self-loop on the second variable.
/// let looped = WeightTensor::new(array![[[0.0], [0.0]], [[0.0], [2.0]]]).unwrap();
/// assert!(has_autocorrelation(&looped));
/// ```
pub fn has_autocorrelation(tensor: &WeightTensor) -> bool {
    // An L2 norm of finite weights is zero iff every lag entry is zero.
    tensor
        .values()
        .axis_iter(Axis(0))
        .enumerate()
        .any(|(variable, row)| row.row(variable).iter().any(|&w| w != 0.0))
}
