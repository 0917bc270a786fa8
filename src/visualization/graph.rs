//! Directed causal-graph rendering via Graphviz DOT.
//!
//! Purpose
//! -------
//! Build a directed graph from a [`WeightTensor`]: nodes are variables and
//! an edge cause → effect exists whenever the L2 norm magnitude reaches
//! `threshold × global_max`. Edge thickness (DOT `penwidth`) scales with
//! the edge's relative magnitude, so stronger relationships draw heavier
//! lines. Graph construction and DOT emission are pure; rasterization is
//! delegated to the external Graphviz `dot` binary in [`CausalGraph::render`].
//!
//! Key behaviors
//! -------------
//! - Select the default layout from the autocorrelation detector: a
//!   circular arrangement when no variable causes itself, the left-to-right
//!   flow layout otherwise. An explicit [`GraphOptions::layout`] override
//!   always wins.
//! - Reject identically-zero tensors ([`WeightError::DegenerateTensor`]):
//!   with a zero global maximum both the edge cutoff and relative
//!   magnitudes are undefined.
//! - [`CausalGraph::render`] writes the DOT source next to the output,
//!   invokes `dot`, and removes the intermediate DOT artifact afterwards.
//!
//! Conventions
//! -----------
//! - Edges are stored as `(cause, effect)` index pairs with a relative
//!   magnitude in `(0, 1]`; `penwidth = 5 × relative magnitude`, matching
//!   the heaviest line to the strongest relationship.
//! - Node identifiers are double-quoted in DOT output with `"` and `\`
//!   escaped.
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::output::OutputSink;
use crate::visualization::errors::{RenderError, RenderResult};
use crate::visualization::figure::ImageFormat;
use crate::weights::{
    autocorrelation::has_autocorrelation,
    norm::{global_max, norm_matrix, DEFAULT_NORM_ORDER},
    tensor::WeightTensor,
    validation::{validate_global_max, validate_threshold, validate_variable_names},
};

/// Multiplier mapping a relative magnitude in (0, 1] to a DOT `penwidth`.
const PENWIDTH_SCALE: f64 = 5.0;

/// Node arrangement of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphLayout {
    /// Left-to-right flow (`rankdir=LR`).
    Flow,
    /// Circular arrangement (`layout=circo`); the default for variable sets
    /// without self-loops.
    Circular,
}

/// Options for [`CausalGraph::from_tensor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    /// Minimum fraction of the global norm maximum for an edge to exist.
    pub threshold: f64,
    /// Explicit layout override; `None` infers from autocorrelation.
    pub layout: Option<GraphLayout>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions { threshold: crate::visualization::heatmap::DEFAULT_THRESHOLD, layout: None }
    }
}

/// A directed edge cause → effect with its magnitude relative to the
/// global norm maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CausalEdge {
    /// Index of the causing variable.
    pub cause: usize,
    /// Index of the affected variable.
    pub effect: usize,
    /// Norm magnitude divided by the global maximum, in (0, 1].
    pub relative_weight: f64,
}

/// A thresholded causal graph over a variable set.
///
/// Constructed by [`CausalGraph::from_tensor`]; [`CausalGraph::to_dot`]
/// emits Graphviz DOT source and [`CausalGraph::render`] rasterizes it
/// through the external `dot` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct CausalGraph {
    nodes: Vec<String>,
    edges: Vec<CausalEdge>,
    layout: GraphLayout,
}

impl CausalGraph {
    /// Build the thresholded graph for `tensor`.
    ///
    /// Parameters
    /// ----------
    /// - `tensor`: `&WeightTensor`
    ///   Validated `(effect, cause, lag)` weight tensor.
    /// - `var_names`: `&[String]`
    ///   Node labels; length must equal the tensor's variable count.
    /// - `opts`: `&GraphOptions`
    ///   Edge threshold fraction and optional layout override.
    ///
    /// Returns
    /// -------
    /// `RenderResult<CausalGraph>`
    ///   The graph with one node per variable and an edge cause → effect
    ///   for every norm magnitude at or above `threshold × global_max`.
    ///
    /// Errors
    /// ------
    /// - `RenderError::Weight(WeightError::VariableNameMismatch)` on label
    ///   length mismatch.
    /// - `RenderError::Weight(WeightError::InvalidThreshold)` for an
    ///   out-of-domain threshold fraction.
    /// - `RenderError::Weight(WeightError::DegenerateTensor)` for an
    ///   identically-zero tensor.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use granger_viz::visualization::graph::{CausalGraph, GraphLayout, GraphOptions};
    /// # use granger_viz::weights::tensor::WeightTensor;
    /// use ndarray::array;
    ///
    /// let tensor = WeightTensor::new(array![[[0.0], [5.0]], [[0.0], [0.0]]]).unwrap();
    /// let names = vec!["A".to_string(), "B".to_string()];
    /// let graph = CausalGraph::from_tensor(&tensor, &names, &GraphOptions::default()).unwrap();
    ///
    /// // One edge B -> A, circular layout inferred (no self-loops).
    /// assert_eq!(graph.edges().len(), 1);
    /// assert_eq!(graph.layout(), GraphLayout::Circular);
    /// ```
    pub fn from_tensor(
        tensor: &WeightTensor, var_names: &[String], opts: &GraphOptions,
    ) -> RenderResult<CausalGraph> {
        validate_variable_names(var_names, tensor.num_variables())?;
        let threshold = validate_threshold(opts.threshold)?;

        let norm = norm_matrix(tensor, DEFAULT_NORM_ORDER)?;
        let norm_max = validate_global_max(global_max(&norm))?;
        let cutoff = threshold * norm_max;

        let layout = opts.layout.unwrap_or_else(|| {
            if has_autocorrelation(tensor) { GraphLayout::Flow } else { GraphLayout::Circular }
        });
        debug!(?layout, cutoff, "constructing causal graph");

        let edges = norm
            .indexed_iter()
            .filter(|(_, &magnitude)| magnitude >= cutoff)
            .map(|((effect, cause), &magnitude)| CausalEdge {
                cause,
                effect,
                relative_weight: magnitude / norm_max,
            })
            .collect();

        Ok(CausalGraph { nodes: var_names.to_vec(), edges, layout })
    }

    /// Node labels in variable order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in row-major (effect, cause) scan order.
    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    /// The selected layout (inferred or overridden).
    pub fn layout(&self) -> GraphLayout {
        self.layout
    }

    /// Emit the graph as Graphviz DOT source.
    ///
    /// The graph carries `margin=0` and `rankdir=LR`; circular graphs add
    /// `layout=circo`. Each edge sets `penwidth` to five times its relative
    /// magnitude and `arrowsize=1`.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph {\n");
        dot.push_str("    margin=0;\n");
        dot.push_str("    rankdir=LR;\n");
        if self.layout == GraphLayout::Circular {
            dot.push_str("    layout=circo;\n");
        }
        for node in &self.nodes {
            let _ = writeln!(dot, "    {};", quote(node));
        }
        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "    {} -> {} [penwidth={:.3}, arrowsize=1];",
                quote(&self.nodes[edge.cause]),
                quote(&self.nodes[edge.effect]),
                PENWIDTH_SCALE * edge.relative_weight,
            );
        }
        dot.push_str("}\n");
        dot
    }

    /// Render the graph to `<sink>/<filename>.<ext>` via the Graphviz `dot`
    /// binary, removing the intermediate `.dot` file afterwards.
    ///
    /// Errors
    /// ------
    /// - `RenderError::Io` if the DOT source cannot be written or the
    ///   intermediate file cannot be removed.
    /// - `RenderError::Graphviz` if `dot` cannot be spawned (e.g. Graphviz
    ///   is not installed) or exits with failure; the message carries the
    ///   binary's stderr.
    pub fn render(
        &self, sink: &OutputSink, filename: &str, format: ImageFormat,
    ) -> RenderResult<PathBuf> {
        let dot_path = sink.file_path(filename, "dot");
        fs::write(&dot_path, self.to_dot())?;

        let out_path = sink.file_path(filename, format.extension());
        let output = Command::new("dot")
            .arg(format!("-T{}", format.extension()))
            .arg(&dot_path)
            .arg("-o")
            .arg(&out_path)
            .output()
            .map_err(|err| RenderError::Graphviz {
                message: format!("failed to run the `dot` binary: {err}"),
            });

        // The intermediate DOT source is a layout artifact; remove it before
        // reporting the render outcome.
        let cleanup = fs::remove_file(&dot_path);
        let output = output?;
        if !output.status.success() {
            return Err(RenderError::Graphviz {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        cleanup?;
        debug!(path = %out_path.display(), "rendered causal graph");
        Ok(out_path)
    }
}

/// Double-quote a DOT identifier, escaping `\` and `"`.
fn quote(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
