//! Defines the error type shared by the loader, the trainer,
//! and the plotting routines.
use std::io;

use polars::prelude::PolarsError;
use thiserror::Error;


/// Errors reported by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The data file (or an output file) cannot be accessed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A cell of the CSV file is not a number.
    #[error("line {line}, column {column}: cannot parse `{value}` as a number")]
    Parse {
        /// 1-indexed line number in the file.
        line: usize,
        /// 1-indexed column number.
        column: usize,
        /// The offending cell.
        value: String,
    },

    /// A row has a different number of columns than the first one.
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged {
        /// 1-indexed line number in the file.
        line: usize,
        /// Number of columns of the first data row.
        expected: usize,
        /// Number of columns of this row.
        found: usize,
    },

    /// A column of a data frame contains a missing value.
    #[error("column `{column}` contains a missing value")]
    MissingValue {
        /// Name of the column.
        column: String,
    },

    /// A class label is not an integer.
    #[error("sample {row}: label {value} is not an integer")]
    NonIntegerLabel {
        /// 0-indexed sample number.
        row: usize,
        /// The offending label.
        value: f64,
    },

    /// A class label is outside of `1..=C`,
    /// where `C` is the number of distinct labels.
    #[error("sample {row}: label {label} is outside of 1..={n_class}")]
    LabelOutOfRange {
        /// 0-indexed sample number.
        row: usize,
        /// The offending label.
        label: i64,
        /// Number of distinct labels in the sample.
        n_class: usize,
    },

    /// The file contains no data row.
    #[error("the sample has no example")]
    EmptySample,

    /// The file has a label column only.
    #[error("the sample has no feature column")]
    NoFeature,

    /// Shapes of the sample, the weights, or the plot do not agree.
    #[error("dimension mismatch: {0}")]
    Dimension(String),

    /// Gradient descent produced `NaN` or an infinity.
    #[error(
        "non-finite {quantity} at iteration {iteration}; \
        try a smaller step size"
    )]
    NonFinite {
        /// Either `"gradient"` or `"weights"`.
        quantity: &'static str,
        /// The iteration at which the value was observed.
        iteration: usize,
    },

    /// Error raised by `polars`.
    #[error("polars: {0}")]
    Polars(#[from] PolarsError),

    /// A model file cannot be (de)serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// The drawing backend failed.
    #[error("plotting failed: {0}")]
    Plot(String),

    /// Invalid command-line argument or configuration value.
    #[error("invalid argument: {0}")]
    Argument(String),
}


/// A `Result` alias with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
