//! Generate pipeline — cross-join, compute, render, write.
//!
//! One `.vot` file per camera-optic pairing, processed strictly in catalog
//! order: cameras outer, optics inner. Every pairing is independent; the
//! pipeline holds no state across iterations beyond the report it returns.

use std::path::PathBuf;

use fovgen_core::{filename, fov, CameraSpec, FovResult, OpticSpec};
use fovgen_renderer::{FootprintContext, FootprintTemplate};

use crate::error::BatchError;
use crate::writer::{write_vot, WriteResult};

// ---------------------------------------------------------------------------
// Options and report
// ---------------------------------------------------------------------------

/// How many pairings a generate run processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairScope {
    /// Full cartesian product of cameras × optics.
    Full,
    /// Stop after the first camera-optic pairing; a single file is written.
    FirstOnly,
}

/// Options for a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the `.vot` files are written into.
    pub out_dir: PathBuf,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    pub scope: PairScope,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            out_dir: PathBuf::from("."),
            dry_run: false,
            scope: PairScope::Full,
        }
    }
}

/// Outcome for one pairing.
#[derive(Debug, Clone)]
pub struct PairOutput {
    pub camera_name: String,
    pub optic_name: String,
    pub corrector_name: String,
    pub filename: String,
    pub fov: FovResult,
    pub write: WriteResult,
}

/// Summary of a generate run, one entry per pairing processed.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub outputs: Vec<PairOutput>,
}

// ---------------------------------------------------------------------------
// Cross join
// ---------------------------------------------------------------------------

/// Cartesian product of cameras × optics, cameras outer.
pub fn pairings<'a>(
    cameras: &'a [CameraSpec],
    optics: &'a [OpticSpec],
) -> impl Iterator<Item = (&'a CameraSpec, &'a OpticSpec)> {
    cameras
        .iter()
        .flat_map(move |camera| optics.iter().map(move |optic| (camera, optic)))
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Render and write one footprint per pairing.
///
/// Fail-fast: the first calculator, render or write error aborts the run and
/// already-written files are left behind.
pub fn generate(
    cameras: &[CameraSpec],
    optics: &[OpticSpec],
    template: &FootprintTemplate,
    opts: &GenerateOptions,
) -> Result<GenerateReport, BatchError> {
    tracing::debug!(
        "generating {} camera(s) x {} optic(s) into {}",
        cameras.len(),
        optics.len(),
        opts.out_dir.display()
    );

    let mut outputs = Vec::new();
    for (camera, optic) in pairings(cameras, optics) {
        let fov = fov::half_fields(camera, optic)?;
        let stem = filename::compose(&camera.name, &optic.name, &optic.corrector);
        let filename = format!("{stem}.vot");

        let ctx = FootprintContext::new(stem, camera, optic, &fov);
        let content = template.render_footprint(&ctx);

        let path = opts.out_dir.join(&filename);
        let write = write_vot(&path, &content, opts.dry_run)?;

        outputs.push(PairOutput {
            camera_name: camera.name.clone(),
            optic_name: optic.name.clone(),
            corrector_name: optic.corrector.clone(),
            filename,
            fov,
            write,
        });

        if opts.scope == PairScope::FirstOnly {
            break;
        }
    }

    Ok(GenerateReport { outputs })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
