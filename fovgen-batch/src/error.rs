//! Error types for fovgen-batch.

use std::path::PathBuf;

use thiserror::Error;

use fovgen_core::{CatalogError, FovError};
use fovgen_renderer::RenderError;

/// All errors that can arise from a generate run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// An error while reading a catalog.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An error from the field-of-view calculator.
    #[error("field-of-view error: {0}")]
    Fov(#[from] FovError),

    /// An error from the template store.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BatchError {
    BatchError::Io {
        path: path.into(),
        source,
    }
}
