//! storage — single-archive persistence for computation results.
//!
//! Purpose
//! -------
//! Provide the result store: [`results::save_results`] and
//! [`results::load_results`] round-trip a weight tensor, an opaque
//! hyperparameter mapping, and an optional sub-model tensor through one
//! `.npz` archive. Errors are centralized in [`errors`]
//! (`StorageError` / `StorageResult`).
//!
//! Conventions
//! -----------
//! - Archive fields are named `W`, `hparams`, and `W_submod`; the `.npz`
//!   extension is fixed by the storage mechanism and implicit on load.
//! - Tensors are persisted verbatim with no validation; the store is
//!   strictly inverse to itself.

pub mod errors;
pub mod results;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{StorageError, StorageResult};
pub use self::results::{load_results, save_results, Hyperparameters, ResultSet};
