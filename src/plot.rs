//! Renders the sample, the per-class separators,
//! and the fused decision regions.
//!
//! The plotting routines require 2-dimensional features.

/// Defines the class colors.
pub mod palette;
/// Defines the plot options.
pub mod options;
/// Evaluates the fused decision rule over a grid.
pub mod grid;
/// Draws the three panels.
pub mod panels;
/// Draws the cost curve.
pub mod history;

pub use palette::class_color;
pub use options::PlotOptions;
pub use grid::{DecisionGrid, decision_grid};
pub use panels::plot_all;
pub use history::plot_cost_history;


use plotters::drawing::DrawingAreaErrorKind;
use std::path::Path;

use crate::error::Error;


/// Converts a drawing error into [`Error::Plot`].
pub(crate) fn plot_error<E>(error: DrawingAreaErrorKind<E>) -> Error
    where E: std::error::Error + Send + Sync,
{
    Error::Plot(error.to_string())
}


/// Returns `true` if `path` should be rendered by the SVG backend.
pub(crate) fn is_svg<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
