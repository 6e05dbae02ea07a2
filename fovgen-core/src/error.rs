//! Error types for fovgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while reading a camera or optics catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file did not exist at the expected path.
    #[error("catalog not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure while opening or reading a catalog file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level failure (malformed quoting, inconsistent column count).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row exposes fewer columns than the reader consumes.
    #[error("line {line}: expected at least {expected} columns, found {found}")]
    Row {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric field failed to parse as its expected type.
    #[error("line {line}: invalid {column} value '{value}'")]
    Numeric {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// All errors that can arise from the field-of-view calculator.
///
/// The calculator validates every operand before dividing, so a zero focal
/// length surfaces here instead of as a silent division result.
#[derive(Debug, Error)]
pub enum FovError {
    /// Focal length must be strictly positive (it is the divisor).
    #[error("focal length must be positive, got {0} mm")]
    NonPositiveFocalLength(i32),

    /// Photosite size must be strictly positive.
    #[error("photosite size must be positive, got {0} µm")]
    NonPositivePhotositeSize(f64),

    /// Photosite count must be strictly positive.
    #[error("photosite count must be positive, got {0}")]
    NonPositivePhotositeCount(i32),
}
