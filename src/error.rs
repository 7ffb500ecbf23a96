//! Error types for loading problems and configuring runs.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspPsoResult<T> = Result<T, TspPsoError>;

/// Errors raised before an optimization run starts.
///
/// Nothing inside the iteration loop is fallible: every variant here is
/// produced while reading the distance matrix or validating the
/// configuration.
///
/// # Examples
///
/// ```
/// use tsp_pso::error::TspPsoError;
///
/// let err = TspPsoError::RaggedRow { line: 3, expected: 4, found: 3 };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug, Error)]
pub enum TspPsoError {
    /// The problem file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matrix entry is not a finite decimal number.
    #[error("line {line}, column {column}: invalid distance '{token}'")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    /// A matrix built in code holds NaN or an infinity (0-based indices).
    #[error("distance at row {row}, column {column} is not finite: {value}")]
    NonFinite { row: usize, column: usize, value: f64 },

    /// A row has a different length than the first row.
    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The row count differs from the row length.
    #[error("distance matrix is not square: {rows} rows, {columns} columns")]
    NotSquare { rows: usize, columns: usize },

    /// The matrix has no cities.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A position vector does not match the problem dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The run configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
