//! CLI subcommands.

pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};

use fovgen_core::{catalog, CameraSpec, OpticSpec};

/// Camera catalog: embedded copy, or a `--cameras` override.
pub(crate) fn load_cameras(path: Option<&Path>) -> Result<Vec<CameraSpec>> {
    match path {
        Some(p) => catalog::load_cameras(p)
            .with_context(|| format!("failed to read camera catalog '{}'", p.display())),
        None => catalog::builtin_cameras().context("failed to parse embedded camera catalog"),
    }
}

/// Optics catalog: embedded copy, or an `--optics` override.
pub(crate) fn load_optics(path: Option<&Path>) -> Result<Vec<OpticSpec>> {
    match path {
        Some(p) => catalog::load_optics(p)
            .with_context(|| format!("failed to read optics catalog '{}'", p.display())),
        None => catalog::builtin_optics().context("failed to parse embedded optics catalog"),
    }
}
