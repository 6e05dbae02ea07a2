//! `fovgen list` — tabulate pairings with computed half-fields.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{Table, Tabled};

use fovgen_batch::pairings;
use fovgen_core::{filename, fov};

use super::{load_cameras, load_optics};

/// Arguments for `fovgen list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Camera catalog CSV (defaults to the embedded catalog).
    #[arg(long)]
    pub cameras: Option<PathBuf>,

    /// Optics catalog CSV (defaults to the embedded catalog).
    #[arg(long)]
    pub optics: Option<PathBuf>,

    /// Emit the pairings as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One pairing row of the listing.
#[derive(Debug, Serialize, Tabled)]
struct PairRow {
    #[tabled(rename = "camera")]
    camera: String,
    #[tabled(rename = "optic")]
    optic: String,
    #[tabled(rename = "corrector")]
    corrector: String,
    #[tabled(rename = "focal (mm)")]
    focal_length_mm: i32,
    #[tabled(rename = "half W (\")")]
    half_width_arcsec: i64,
    #[tabled(rename = "half H (\")")]
    half_height_arcsec: i64,
    #[tabled(rename = "file")]
    file: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let cameras = load_cameras(self.cameras.as_deref())?;
        let optics = load_optics(self.optics.as_deref())?;

        let mut rows = Vec::new();
        for (camera, optic) in pairings(&cameras, &optics) {
            let fov = fov::half_fields(camera, optic).with_context(|| {
                format!("invalid pairing '{}' x '{}'", camera.name, optic.name)
            })?;
            rows.push(PairRow {
                camera: camera.name.clone(),
                optic: optic.name.clone(),
                corrector: optic.corrector.clone(),
                focal_length_mm: optic.focal_length_mm,
                half_width_arcsec: fov.half_width_arcsec,
                half_height_arcsec: fov.half_height_arcsec,
                file: filename::vot_filename(&camera.name, &optic.name, &optic.corrector),
            });
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            println!("{}", Table::new(&rows));
        }

        Ok(())
    }
}
