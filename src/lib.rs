//! granger_viz — visualization and persistence helpers for Granger-causality
//! weight tensors.
//!
//! Purpose
//! -------
//! Serve as the presentation and persistence layer of a causal-inference
//! analysis pipeline. An upstream modeling component produces a dense
//! `(effect, cause, lag)` weight tensor; this crate renders it as heatmaps
//! or directed causal graphs and round-trips results through single-file
//! archives. There is no modeling, solving, or estimation here.
//!
//! Key behaviors
//! -------------
//! - Validate caller-supplied tensors once and share the validated
//!   container across the crate ([`weights`]).
//! - Reduce the lag axis via L-p norms, detect autocorrelation
//!   (self-loops), and derive edge sets and color scales from the reduced
//!   matrix.
//! - Render joint, thresholded, and per-variable heatmaps through
//!   `plotters`, and directed graphs through Graphviz DOT
//!   ([`visualization`]).
//! - Save and load weight tensors plus hyperparameter mappings as `.npz`
//!   archives ([`storage`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - All entities are transient: constructed per invocation from
//!   caller-supplied arrays and never retained across calls.
//! - Contract violations (malformed shapes, label mismatches, degenerate
//!   tensors, out-of-domain parameters) fail fast with structured errors;
//!   filesystem errors propagate unmodified.
//! - Rendering state is explicit: figures and graphs are plain values, and
//!   file output goes through the [`output::OutputSink`] abstraction. No
//!   process-wide plotting state exists.
//!
//! Concurrency
//! -----------
//! - Single-threaded and synchronous throughout. No locks, no channels,
//!   no cancellation; every operation is a blocking call.
//!
//! Downstream usage
//! ----------------
//! - Library only: no CLI, no network, no environment-variable
//!   configuration. Consumers construct a [`weights::WeightTensor`] from
//!   their learned weights and call into [`visualization`] and [`storage`]
//!   directly, or import the common surface via [`prelude`].

pub mod output;
pub mod storage;
pub mod visualization;
pub mod weights;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use granger_viz::prelude::*;
//
// to import the main rendering and persistence surface in a single line,
// without pulling in lower-level internals.

pub mod prelude {
    pub use crate::output::OutputSink;
    pub use crate::storage::{
        load_results, save_results, Hyperparameters, ResultSet, StorageError, StorageResult,
    };
    pub use crate::visualization::{
        causal_heatmap, save_heatmaps, CausalEdge, CausalGraph, GraphLayout, GraphOptions,
        HeatmapFigure, HeatmapMode, HeatmapOptions, ImageFormat, RenderError, RenderResult,
    };
    pub use crate::weights::{
        has_autocorrelation, norm_matrix, WeightError, WeightResult, WeightTensor,
    };
}
