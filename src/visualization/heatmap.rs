//! Heatmap rendering of causal weight tensors.
//!
//! Purpose
//! -------
//! Turn a validated [`WeightTensor`] into one or more [`HeatmapFigure`]s in
//! the three supported modes, without performing any I/O:
//!
//! - [`HeatmapMode::Joint`] — a single effect × cause map of norm
//!   magnitudes.
//! - [`HeatmapMode::JointThreshold`] — the same shape with every cell
//!   binarized against `threshold × global_max`.
//! - [`HeatmapMode::Individual`] — one cause × lag map per effect variable,
//!   all sharing the global norm maximum as their color-scale ceiling so
//!   magnitudes stay visually comparable across variables.
//!
//! Writing figures to disk is a separate step, [`save_heatmaps`], which
//! goes through an [`OutputSink`] and names files
//! `<header>_overall.<ext>` (joint modes) or `<header>_<variable>.<ext>`
//! (individual mode).
//!
//! Invariants & assumptions
//! ------------------------
//! - Variable names must match the tensor's variable count; violations fail
//!   fast with [`WeightError::VariableNameMismatch`].
//! - Binarization works on a fresh derived copy; the norm matrix itself is
//!   never mutated, so callers may render both thresholded and
//!   un-thresholded views of the same tensor.
//! - Color scales anchor their minimum at zero in every mode.
//!
//! Conventions
//! -----------
//! - The cause axis is horizontal and the effect (response) axis vertical in
//!   joint modes; individual figures put causes horizontal and lags
//!   vertical, with lag `j` labeled `j + 1`.
use std::path::PathBuf;

use ndarray::Axis;
use tracing::debug;

use crate::output::OutputSink;
use crate::visualization::errors::RenderResult;
use crate::visualization::figure::{HeatmapFigure, ImageFormat};
use crate::weights::{
    autocorrelation::has_autocorrelation,
    norm::{global_max, norm_matrix, DEFAULT_NORM_ORDER},
    tensor::WeightTensor,
    validation::{validate_global_max, validate_threshold, validate_variable_names},
};

/// File-stem suffix shared by the joint modes.
const OVERALL_SUFFIX: &str = "overall";

/// Default threshold fraction for [`HeatmapMode::JointThreshold`].
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Rendering mode for [`causal_heatmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapMode {
    /// One effect × cause heatmap of norm magnitudes.
    Joint,
    /// One effect × cause heatmap binarized against `threshold × max`.
    JointThreshold,
    /// One cause × lag heatmap per effect variable, shared color scale.
    Individual,
}

/// Options for [`causal_heatmap`].
///
/// `norm_order` defaults to 2, `threshold` to 0.1 (only meaningful for
/// [`HeatmapMode::JointThreshold`]), and `format` to PNG.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapOptions {
    /// Order of the L-p norm reducing the lag axis.
    pub norm_order: f64,
    /// Fraction of the global maximum used for binarization.
    pub threshold: f64,
    /// Image format used when the figures are saved.
    pub format: ImageFormat,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        HeatmapOptions {
            norm_order: DEFAULT_NORM_ORDER,
            threshold: DEFAULT_THRESHOLD,
            format: ImageFormat::default(),
        }
    }
}

/// Render `tensor` as heatmap figures in the requested mode.
///
/// Parameters
/// ----------
/// - `tensor`: `&WeightTensor`
///   Validated `(effect, cause, lag)` weight tensor.
/// - `var_names`: `&[String]`
///   Ordered labels for both axes; length must equal the tensor's variable
///   count.
/// - `mode`: `HeatmapMode`
///   One of the three rendering modes.
/// - `opts`: `&HeatmapOptions`
///   Norm order, threshold fraction, and output format.
///
/// Returns
/// -------
/// `RenderResult<Vec<HeatmapFigure>>`
///   - One figure for the joint modes; one figure per effect variable for
///     [`HeatmapMode::Individual`].
///
/// Errors
/// ------
/// - `RenderError::Weight(WeightError::VariableNameMismatch)` on a label
///   length mismatch.
/// - `RenderError::Weight(WeightError::InvalidNormOrder)` for an
///   out-of-domain norm order.
/// - `RenderError::Weight(WeightError::InvalidThreshold)` /
///   `RenderError::Weight(WeightError::DegenerateTensor)` in
///   [`HeatmapMode::JointThreshold`] for an out-of-domain fraction or an
///   identically-zero tensor.
///
/// Notes
/// -----
/// - This function performs no I/O; pass the figures to [`save_heatmaps`]
///   to write them.
pub fn causal_heatmap(
    tensor: &WeightTensor, var_names: &[String], mode: HeatmapMode, opts: &HeatmapOptions,
) -> RenderResult<Vec<HeatmapFigure>> {
    let variables = tensor.num_variables();
    validate_variable_names(var_names, variables)?;

    let norm = norm_matrix(tensor, opts.norm_order)?;
    let norm_max = global_max(&norm);

    let autocorrelation = has_autocorrelation(tensor);
    debug!(autocorrelation, "inferred autocorrelation setting of the analysis");

    let figures = match mode {
        HeatmapMode::Joint => {
            vec![HeatmapFigure::new(
                OVERALL_SUFFIX.to_string(),
                "Cause".to_string(),
                "Response".to_string(),
                var_names.to_vec(),
                var_names.to_vec(),
                norm,
                norm_max,
            )]
        }
        HeatmapMode::JointThreshold => {
            let threshold = validate_threshold(opts.threshold)?;
            let norm_max = validate_global_max(norm_max)?;
            // Binarize into a fresh copy; the norm matrix stays untouched.
            let cutoff = threshold * norm_max;
            let cells = norm.mapv(|v| if v >= cutoff { 1.0 } else { 0.0 });
            vec![HeatmapFigure::new(
                OVERALL_SUFFIX.to_string(),
                "Cause".to_string(),
                "Response".to_string(),
                var_names.to_vec(),
                var_names.to_vec(),
                cells,
                1.0,
            )]
        }
        HeatmapMode::Individual => {
            let lags = tensor.num_lags();
            let lag_ticks: Vec<String> = (1..=lags).map(|lag| lag.to_string()).collect();
            var_names
                .iter()
                .enumerate()
                .map(|(effect, var)| {
                    // (cause, lag) slice for this effect, transposed so lags
                    // run down the vertical axis.
                    let cells = tensor.values().index_axis(Axis(0), effect).t().to_owned();
                    HeatmapFigure::new(
                        var.clone(),
                        format!("Causes to {var}"),
                        "Time Lag".to_string(),
                        var_names.to_vec(),
                        lag_ticks.clone(),
                        cells,
                        norm_max,
                    )
                })
                .collect()
        }
    };
    Ok(figures)
}

/// Write previously rendered figures through `sink`.
///
/// File stems concatenate `file_header` with each figure's mode-specific
/// suffix; extensions come from `format`. Returns the written paths in
/// figure order.
///
/// Errors
/// ------
/// - `RenderError::Backend` for plotting-backend failures (including the
///   file I/O owned by the backend).
pub fn save_heatmaps(
    figures: &[HeatmapFigure], sink: &OutputSink, file_header: &str, format: ImageFormat,
) -> RenderResult<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(figures.len());
    for figure in figures {
        let stem = format!("{file_header}_{}", figure.name());
        let path = sink.file_path(&stem, format.extension());
        figure.save(&path, format)?;
        debug!(path = %path.display(), "saved heatmap figure");
        paths.push(path);
    }
    Ok(paths)
}
