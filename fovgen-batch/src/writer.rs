//! Plain truncating writer for rendered `.vot` files.
//!
//! Content is written as UTF-8 bytes; the encoding is a property of the
//! rendered `str`, not of any platform default. Writes are not atomic; an
//! interrupted process may leave a partial file.

use std::path::{Path, PathBuf};

use crate::error::{io_err, BatchError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (created, or truncated and replaced).
    Written { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    /// The target path, regardless of outcome.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// Write one rendered footprint, truncating any existing file.
///
/// The file handle is scoped to this call and released whether the write
/// completes or fails. No retry on failure.
pub(crate) fn write_vot(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, BatchError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, content.as_bytes()).map_err(|e| io_err(path, e))?;

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
