//! Errors for result-archive persistence (npz writing/reading and
//! hyperparameter encoding).
//!
//! Filesystem errors propagate unmodified inside [`StorageError::Io`];
//! archive-format failures from the npz layer are folded into
//! [`StorageError::Archive`] with the underlying message. A well-formed
//! archive missing a required field is a caller contract violation reported
//! as [`StorageError::MissingField`].

use ndarray_npy::{ReadNpzError, WriteNpzError};

/// Result alias for storage operations that may produce [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

/// Unified error type for the result store.
#[derive(Debug)]
pub enum StorageError {
    /// A filesystem failure while creating, writing, or opening an archive.
    Io(std::io::Error),

    /// An npz archive could not be written or parsed.
    Archive { message: String },

    /// The archive lacks a required field (`W` or `hparams`).
    MissingField { name: &'static str },

    /// The hyperparameter mapping could not be encoded or decoded.
    Hyperparameters(serde_json::Error),
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Hyperparameters(err) => Some(err),
            StorageError::Archive { .. } | StorageError::MissingField { .. } => None,
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => {
                write!(f, "I/O failure while accessing result archive: {err}")
            }
            StorageError::Archive { message } => {
                write!(f, "Result archive failure: {message}")
            }
            StorageError::MissingField { name } => {
                write!(f, "Result archive is missing required field '{name}'.")
            }
            StorageError::Hyperparameters(err) => {
                write!(f, "Hyperparameter mapping could not be round-tripped: {err}")
            }
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<WriteNpzError> for StorageError {
    fn from(err: WriteNpzError) -> Self {
        StorageError::Archive { message: err.to_string() }
    }
}

impl From<ReadNpzError> for StorageError {
    fn from(err: ReadNpzError) -> Self {
        StorageError::Archive { message: err.to_string() }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Hyperparameters(err)
    }
}
