//! Explicit heatmap figures — rendering state as a value, not an ambient
//! "current figure".
//!
//! Purpose
//! -------
//! Carry everything needed to draw one heatmap (cells, tick labels, axis
//! labels, color range) in a plain value, [`HeatmapFigure`], produced by
//! the pure rendering functions in [`crate::visualization::heatmap`]. File
//! output is a separate, explicit step ([`HeatmapFigure::save`]), so the
//! array-in / figure-out path stays free of I/O and there is no hidden
//! process-wide plotting state.
//!
//! Key behaviors
//! -------------
//! - Hold the cell matrix with `rows = y` axis entries (row 0 drawn at the
//!   top, matching matrix orientation) and `cols = x` axis entries.
//! - Anchor the color scale's minimum at zero so "no effect" always renders
//!   as the white baseline; the maximum is figure-specific (per-figure norm
//!   maximum, the global maximum in shared-scale mode, or 1.0 for binarized
//!   figures).
//! - Draw through `plotters` with a raster (`BitMapBackend`) or vector
//!   (`SVGBackend`) backend selected by [`ImageFormat`].
//!
//! Conventions
//! -----------
//! - Backend failures are folded into `RenderError::Backend` with the
//!   backend's message; filesystem errors surface through the backend as
//!   well since `plotters` owns the file handle.
use std::path::Path;

use ndarray::{Array2, ArrayView2};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::visualization::colormap::greys;
use crate::visualization::errors::{RenderError, RenderResult};

/// Pixel edge length of one heatmap cell.
const CELL_PX: u32 = 44;

/// Output image format for rendered figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Portable Network Graphics (raster, the default).
    #[default]
    Png,
    /// Windows bitmap (raster).
    Bmp,
    /// Scalable Vector Graphics (vector).
    Svg,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Svg => "svg",
        }
    }
}

/// One rendered heatmap: cells, labels, and a zero-anchored color range.
///
/// Produced by [`crate::visualization::heatmap::causal_heatmap`]; the
/// `name` field is the mode-specific file-stem suffix (`overall` for joint
/// modes, the variable name for individual figures).
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapFigure {
    name: String,
    x_label: String,
    y_label: String,
    x_ticks: Vec<String>,
    y_ticks: Vec<String>,
    cells: Array2<f64>,
    vmax: f64,
}

impl HeatmapFigure {
    pub(crate) fn new(
        name: String, x_label: String, y_label: String, x_ticks: Vec<String>,
        y_ticks: Vec<String>, cells: Array2<f64>, vmax: f64,
    ) -> HeatmapFigure {
        debug_assert_eq!(cells.nrows(), y_ticks.len());
        debug_assert_eq!(cells.ncols(), x_ticks.len());
        HeatmapFigure { name, x_label, y_label, x_ticks, y_ticks, cells, vmax }
    }

    /// Mode-specific file-stem suffix (`overall` or a variable name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell magnitudes, row 0 at the top.
    pub fn cells(&self) -> ArrayView2<'_, f64> {
        self.cells.view()
    }

    /// The color range `(vmin, vmax)`; `vmin` is always zero.
    pub fn color_range(&self) -> (f64, f64) {
        (0.0, self.vmax)
    }

    /// Cause-axis (x) tick labels.
    pub fn x_ticks(&self) -> &[String] {
        &self.x_ticks
    }

    /// Effect- or lag-axis (y) tick labels.
    pub fn y_ticks(&self) -> &[String] {
        &self.y_ticks
    }

    /// Render the figure to `path` with the backend selected by `format`.
    ///
    /// Errors
    /// ------
    /// - `RenderError::Backend` for any plotting-backend failure, including
    ///   the underlying file I/O owned by the backend.
    pub fn save(&self, path: &Path, format: ImageFormat) -> RenderResult<()> {
        let (rows, cols) = self.cells.dim();
        let width = cols as u32 * CELL_PX + 130;
        let height = rows as u32 * CELL_PX + 70;
        match format {
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, (width, height)).into_drawing_area();
                self.draw_on(&root)
            }
            ImageFormat::Png | ImageFormat::Bmp => {
                let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
                self.draw_on(&root)
            }
        }
    }

    fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> RenderResult<()> {
        root.fill(&WHITE).map_err(backend_err)?;
        let (rows, cols) = self.cells.dim();

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(0..cols, 0..rows)
            .map_err(backend_err)?;

        let x_ticks = &self.x_ticks;
        let y_ticks = &self.y_ticks;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .x_labels(cols + 1)
            .y_labels(rows + 1)
            .x_label_formatter(&|x: &usize| x_ticks.get(*x).cloned().unwrap_or_default())
            // Row 0 is drawn at the top, so the y axis runs downward.
            .y_label_formatter(&|y: &usize| {
                if *y < rows { y_ticks[rows - 1 - *y].clone() } else { String::new() }
            })
            .draw()
            .map_err(backend_err)?;

        let vmax = self.vmax;
        chart
            .draw_series(self.cells.indexed_iter().map(|((row, col), &value)| {
                let t = if vmax > 0.0 { value / vmax } else { 0.0 };
                let y = rows - 1 - row;
                Rectangle::new([(col, y), (col + 1, y + 1)], greys(t).filled())
            }))
            .map_err(backend_err)?;

        root.present().map_err(backend_err)?;
        Ok(())
    }
}

fn backend_err<E>(err: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Backend { message: err.to_string() }
}
