// ============================================================
// Layer 3 - Frame Errors
// ============================================================
// Everything that can go wrong while reshaping or splitting a
// table. The common ones are user-facing (a typo in the target
// column name, an unknown dataset), so they carry enough context
// to print a useful message on their own.
//
// Failures raised inside polars itself travel as FrameError::Polars.
// I/O failures are NOT modelled here; those travel as anyhow
// errors with path/URL context attached by the data layer.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    /// A column was requested by name but the table has no such column.
    #[error("column '{name}' not found (available columns: {})", .available.join(", "))]
    ColumnNotFound {
        name:      String,
        available: Vec<String>,
    },

    /// Two tables that must stay row-aligned have different heights.
    #[error("'{name}' has {actual} rows but {expected} were expected")]
    LengthMismatch {
        name:     String,
        expected: usize,
        actual:   usize,
    },

    /// The requested dataset is not in the example registry.
    #[error("'{0}' is not one of the example datasets")]
    UnknownDataset(String),

    #[error("test_size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    /// A split would leave one side without rows.
    #[error("cannot split {rows} rows with test_size {test_size}: the train set would be empty")]
    Empty {
        rows:      usize,
        test_size: f64,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
