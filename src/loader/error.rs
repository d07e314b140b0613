use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that prevent the dashboard from starting.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("dataset file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("failed to read dataset {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("dataset {path:?} has no header row")]
    NoHeader { path: PathBuf },
    #[error("columns {first:?} and {second:?} both normalize to `{normalized}`")]
    DuplicateColumn {
        first: String,
        second: String,
        normalized: String,
    },
    #[error("dataset {path:?} is missing required columns: {}", .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
    #[error("invalid value {value:?} in column `{column}` at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}
