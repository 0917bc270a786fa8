//! visualization — heatmap and causal-graph rendering of weight tensors.
//!
//! Purpose
//! -------
//! Turn validated weight tensors into visual artifacts: effect × cause
//! heatmaps in three modes ([`heatmap`]) and thresholded directed graphs
//! ([`graph`]). Rendering is split into a pure phase (array in, figure or
//! graph value out) and an explicit output phase going through
//! [`crate::output::OutputSink`], so there is no hidden plotting state and
//! no directory creation buried inside draw calls.
//!
//! Key behaviors
//! -------------
//! - [`heatmap::causal_heatmap`] / [`heatmap::save_heatmaps`] — joint,
//!   joint-threshold, and per-variable heatmaps with zero-anchored color
//!   scales.
//! - [`graph::CausalGraph`] — threshold-filtered directed graph with
//!   autocorrelation-driven default layout, DOT emission, and rendering
//!   through the external Graphviz `dot` binary.
//! - [`figure::HeatmapFigure`] — the explicit figure value drawn through
//!   `plotters` raster or vector backends.
//! - [`errors`] — the uniform [`RenderError`] surface for the layer.
//!
//! Concurrency
//! -----------
//! - All operations are blocking and synchronous; nothing here is shared
//!   across threads, and no global state is touched.

pub mod colormap;
pub mod errors;
pub mod figure;
pub mod graph;
pub mod heatmap;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{RenderError, RenderResult};
pub use self::figure::{HeatmapFigure, ImageFormat};
pub use self::graph::{CausalEdge, CausalGraph, GraphLayout, GraphOptions};
pub use self::heatmap::{
    causal_heatmap, save_heatmaps, HeatmapMode, HeatmapOptions, DEFAULT_THRESHOLD,
};
