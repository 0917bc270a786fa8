//! weights — validated weight tensors, norm reduction, and autocorrelation
//! detection.
//!
//! Purpose
//! -------
//! Provide the core data layer shared by the rendering and storage stacks: a
//! validated `(effect, cause, lag)` tensor container, L-p norm reduction of
//! the lag axis, the autocorrelation detector, and the validation helpers
//! and error types that enforce the crate's caller contracts.
//!
//! Key behaviors
//! -------------
//! - Validate tensor shape and content once at construction ([`tensor`]).
//! - Reduce the lag axis into an effect × cause norm matrix ([`norm`]).
//! - Detect self-relationships to drive default graph layout
//!   ([`autocorrelation`]).
//! - Centralize weight-layer errors in [`errors`] (`WeightError` and the
//!   `WeightResult` alias) so callers see a uniform error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Weight tensors are square over `(effect, cause)`, have a non-empty lag
//!   axis, and contain only finite entries; see [`WeightTensor::new`].
//! - Norm matrices are derived, recomputed per call, and never persisted.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. Axis 0 = effect, axis 1 = cause, axis 2 = lag.

pub mod autocorrelation;
pub mod errors;
pub mod norm;
pub mod tensor;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::autocorrelation::has_autocorrelation;
pub use self::errors::{WeightError, WeightResult};
pub use self::norm::{global_max, norm_matrix, DEFAULT_NORM_ORDER};
pub use self::tensor::WeightTensor;
