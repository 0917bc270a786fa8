//! Errors for weight-tensor construction and norm reduction (shape checks,
//! finiteness checks, and rendering-parameter validation).
//!
//! This module defines [`WeightError`], the structured error type shared by
//! the core weight types and the rendering layer. All variants describe
//! caller contract violations: this crate treats malformed tensors, label
//! mismatches, and out-of-domain rendering parameters as fail-fast errors
//! rather than producing malformed plots.
//!
//! ## Conventions
//! - **Indices are 0-based** and reported as `(effect, cause, lag)`.
//! - Weight entries must be **finite** (no NaN, no ±∞).
//! - Threshold fractions live in `(0, 1]`; norm orders must be finite
//!   and strictly positive.

/// Crate-wide result alias for operations that may produce [`WeightError`].
pub type WeightResult<T> = Result<T, WeightError>;

/// Unified error type for weight-tensor contract violations.
///
/// Covers tensor shape/content validation and the scalar parameters
/// (norm order, threshold fraction) consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    // ---- Tensor shape / content ----
    /// Tensor has no variables (first dimension is zero).
    EmptyTensor,

    /// Tensor has no lag axis entries (third dimension is zero).
    EmptyLagAxis { variables: usize },

    /// Effect and cause dimensions differ; the variable set must be square.
    NonSquareTensor { effects: usize, causes: usize },

    /// A weight entry is NaN or ±∞.
    NonFiniteWeight { effect: usize, cause: usize, lag: usize, value: f64 },

    // ---- Labels ----
    /// Variable-name count does not match the tensor's variable count.
    VariableNameMismatch { expected: usize, actual: usize },

    // ---- Rendering parameters ----
    /// Norm order must be finite and strictly positive.
    InvalidNormOrder { value: f64 },

    /// Threshold fraction must be finite and in (0, 1].
    InvalidThreshold { value: f64 },

    /// All weights are zero, so thresholding against the global maximum
    /// is undefined.
    DegenerateTensor,
}

impl std::error::Error for WeightError {}

impl std::fmt::Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightError::EmptyTensor => {
                write!(f, "Weight tensor has no variables.")
            }
            WeightError::EmptyLagAxis { variables } => {
                write!(
                    f,
                    "Weight tensor has no lags (shape {variables} x {variables} x 0); at least one lag is required."
                )
            }
            WeightError::NonSquareTensor { effects, causes } => {
                write!(
                    f,
                    "Weight tensor must be square over (effect, cause); got {effects} effects and {causes} causes."
                )
            }
            WeightError::NonFiniteWeight { effect, cause, lag, value } => {
                write!(
                    f,
                    "Weight at (effect {effect}, cause {cause}, lag {lag}) is non-finite: {value}"
                )
            }
            WeightError::VariableNameMismatch { expected, actual } => {
                write!(
                    f,
                    "Variable names must match the tensor's variable count: expected {expected}, got {actual}"
                )
            }
            WeightError::InvalidNormOrder { value } => {
                write!(f, "Norm order must be finite and > 0; got: {value}")
            }
            WeightError::InvalidThreshold { value } => {
                write!(f, "Threshold fraction must be finite and in (0, 1]; got: {value}")
            }
            WeightError::DegenerateTensor => {
                write!(
                    f,
                    "Weight tensor is identically zero; thresholding against the global maximum is undefined."
                )
            }
        }
    }
}
