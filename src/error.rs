use std::path::PathBuf;
use thiserror::Error;

/// The main error type for openimages-pen operations.
///
/// Every failure is fatal to the load that produced it: there is no
/// row-level recovery or retry anywhere in this crate.
#[derive(Debug, Error)]
pub enum OpenImagesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read annotation CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row at line {line} of {path} has {found} fields, expected at least {expected}")]
    RowTooShort {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("Failed to parse coordinate in column {column} at line {line} of {path}: {source}")]
    CoordParse {
        path: PathBuf,
        line: u64,
        column: usize,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("No dataset registered under '{0}'")]
    UnknownDataset(String),

    #[error("A dataset is already registered under '{0}'")]
    DuplicateDataset(String),

    #[error("Failed to serialize records to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
