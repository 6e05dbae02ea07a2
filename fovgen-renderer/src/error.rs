//! Error types for fovgen-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template handling.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Filesystem error while loading a template override.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
