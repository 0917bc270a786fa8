//! Result archives — save and load weight tensors plus hyperparameters.
//!
//! Purpose
//! -------
//! Persist a computation's outputs into a single `.npz` archive and read
//! them back, preserving everything bit-for-bit. An archive holds the main
//! weight tensor under `W`, the opaque hyperparameter mapping under
//! `hparams` (JSON-encoded bytes), and optionally a secondary sub-model
//! tensor under `W_submod`.
//!
//! Key behaviors
//! -------------
//! - [`save_results`] creates the destination directory if absent, writes
//!   all supplied arrays and the mapping, and returns the archive path.
//! - [`load_results`] takes the path **without** its extension (the `.npz`
//!   suffix is implicit), reconstructs the [`ResultSet`], and reports the
//!   sub-model tensor as `None` when the field is absent — never as a
//!   missing-field error.
//!
//! Invariants & assumptions
//! ------------------------
//! - Round-trip law: `load_results` after `save_results` yields a tensor
//!   bit-identical to the saved one, a mapping equal by value, and the same
//!   presence of the sub-model tensor.
//! - Tensors are persisted verbatim; no shape or finiteness validation is
//!   applied here (that is the rendering layer's contract, not the
//!   store's).
//!
//! Conventions
//! -----------
//! - Hyperparameter values are arbitrary JSON values, opaque to this
//!   module. Key order is stable (ordered map) so repeated saves are
//!   deterministic.
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array3};
use ndarray_npy::{NpzReader, NpzWriter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::output::OutputSink;
use crate::storage::errors::{StorageError, StorageResult};

/// Extension of result archives; fixed by the storage mechanism.
const ARCHIVE_EXTENSION: &str = "npz";

/// An opaque, ordered mapping from option name to value.
///
/// Round-tripped verbatim through the archive; this crate never interprets
/// the entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hyperparameters {
    entries: BTreeMap<String, Value>,
}

impl Hyperparameters {
    /// An empty mapping.
    pub fn new() -> Hyperparameters {
        Hyperparameters::default()
    }

    /// Insert or replace an option value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up an option value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Number of options in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

/// The persisted outputs of one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// The main `(effect, cause, lag)` weight tensor, stored under `W`.
    pub weights: Array3<f64>,
    /// The opaque hyperparameter mapping, stored under `hparams`.
    pub hparams: Hyperparameters,
    /// Optional sub-model weight tensor, stored under `W_submod` when
    /// present.
    pub submodel_weights: Option<Array3<f64>>,
}

/// Save `results` to `<dst>/<filename>.npz`, creating `dst` if absent.
///
/// Parameters
/// ----------
/// - `dst`: destination directory; created (with parents) when missing.
/// - `filename`: archive stem without extension.
/// - `results`: tensors and mapping to persist.
///
/// Returns
/// -------
/// `StorageResult<PathBuf>`
///   The path of the written archive.
///
/// Errors
/// ------
/// - `StorageError::Io` for directory-creation or file-creation failures.
/// - `StorageError::Archive` if the npz layer rejects a write.
/// - `StorageError::Hyperparameters` if the mapping cannot be encoded.
pub fn save_results(
    dst: impl AsRef<Path>, filename: &str, results: &ResultSet,
) -> StorageResult<PathBuf> {
    let sink = OutputSink::create(dst)?;
    let path = sink.file_path(filename, ARCHIVE_EXTENSION);

    let mut npz = NpzWriter::new(File::create(&path)?);
    npz.add_array("W", &results.weights)?;
    if let Some(submodel) = &results.submodel_weights {
        npz.add_array("W_submod", submodel)?;
    }
    let encoded = serde_json::to_vec(&results.hparams)?;
    npz.add_array("hparams", &Array1::from_vec(encoded))?;
    npz.finish()?;

    debug!(path = %path.display(), submodel = results.submodel_weights.is_some(), "saved results");
    Ok(path)
}

/// Load a [`ResultSet`] from `src`, given **without** its `.npz` extension.
///
/// Returns
/// -------
/// `StorageResult<ResultSet>`
///   The reconstructed tensors and mapping; `submodel_weights` is `None`
///   when the archive lacks `W_submod`.
///
/// Errors
/// ------
/// - `StorageError::Io` if the archive cannot be opened.
/// - `StorageError::Archive` for malformed archives.
/// - `StorageError::MissingField` if `W` or `hparams` is absent.
/// - `StorageError::Hyperparameters` if the mapping cannot be decoded.
pub fn load_results(src: impl AsRef<Path>) -> StorageResult<ResultSet> {
    // Append rather than replace: a stem like `run.v2` must become
    // `run.v2.npz`.
    let mut os_path = src.as_ref().as_os_str().to_owned();
    os_path.push(".");
    os_path.push(ARCHIVE_EXTENSION);
    let path = PathBuf::from(os_path);

    let mut npz = NpzReader::new(File::open(&path)?)?;
    let entries = npz.names()?;

    let weights: Array3<f64> = npz.by_name(
        &archive_entry(&entries, "W").ok_or(StorageError::MissingField { name: "W" })?,
    )?;
    let encoded: Array1<u8> = npz.by_name(
        &archive_entry(&entries, "hparams")
            .ok_or(StorageError::MissingField { name: "hparams" })?,
    )?;
    let hparams: Hyperparameters = serde_json::from_slice(&encoded.to_vec())?;
    let submodel_weights: Option<Array3<f64>> = match archive_entry(&entries, "W_submod") {
        Some(entry) => Some(npz.by_name(&entry)?),
        None => None,
    };

    debug!(path = %path.display(), submodel = submodel_weights.is_some(), "loaded results");
    Ok(ResultSet { weights, hparams, submodel_weights })
}

/// Find the archive entry for `field`, tolerating the `.npy` suffix the
/// npz container appends to member names.
fn archive_entry(entries: &[String], field: &str) -> Option<String> {
    entries
        .iter()
        .find(|entry| entry.as_str() == field || entry.strip_suffix(".npy") == Some(field))
        .cloned()
}
