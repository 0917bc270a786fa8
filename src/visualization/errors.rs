//! Errors for heatmap and causal-graph rendering.
//!
//! [`RenderError`] folds together the weight-layer contract violations,
//! filesystem failures, plotting-backend failures, and Graphviz invocation
//! failures a render call can surface. Contract violations arrive as
//! [`WeightError`]; environment failures propagate unmodified inside the
//! `Io` variant.

use crate::weights::errors::WeightError;

/// Result alias for rendering operations that may produce [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;

/// Unified error type for the rendering layer.
#[derive(Debug)]
pub enum RenderError {
    /// A weight-layer contract violation (shape, labels, parameters).
    Weight(WeightError),

    /// A filesystem failure while writing rendered artifacts.
    Io(std::io::Error),

    /// A plotters backend failure while drawing a figure.
    Backend { message: String },

    /// The Graphviz `dot` binary could not be run or reported failure.
    Graphviz { message: String },
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Weight(err) => Some(err),
            RenderError::Io(err) => Some(err),
            RenderError::Backend { .. } | RenderError::Graphviz { .. } => None,
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Weight(err) => {
                write!(f, "Invalid render input: {err}")
            }
            RenderError::Io(err) => {
                write!(f, "I/O failure while writing rendered output: {err}")
            }
            RenderError::Backend { message } => {
                write!(f, "Plotting backend failure: {message}")
            }
            RenderError::Graphviz { message } => {
                write!(f, "Graphviz rendering failed: {message}")
            }
        }
    }
}

impl From<WeightError> for RenderError {
    fn from(err: WeightError) -> Self {
        RenderError::Weight(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}
