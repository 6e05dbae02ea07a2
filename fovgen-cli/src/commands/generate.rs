//! `fovgen generate` — render and write footprints for every pairing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fovgen_batch::{generate, GenerateOptions, PairScope, WriteResult};
use fovgen_renderer::FootprintTemplate;

use super::{load_cameras, load_optics};

/// Arguments for `fovgen generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory to write .vot files into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Camera catalog CSV (defaults to the embedded catalog).
    #[arg(long)]
    pub cameras: Option<PathBuf>,

    /// Optics catalog CSV (defaults to the embedded catalog).
    #[arg(long)]
    pub optics: Option<PathBuf>,

    /// Footprint template XML (defaults to the embedded template).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Stop after the first camera-optic pairing instead of the full product.
    #[arg(long)]
    pub first_only: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let cameras = load_cameras(self.cameras.as_deref())?;
        let optics = load_optics(self.optics.as_deref())?;

        let template = match &self.template {
            Some(p) => FootprintTemplate::from_file(p)
                .with_context(|| format!("failed to read template '{}'", p.display()))?,
            None => FootprintTemplate::embedded(),
        };

        let opts = GenerateOptions {
            out_dir: self.out_dir,
            dry_run: self.dry_run,
            scope: if self.first_only {
                PairScope::FirstOnly
            } else {
                PairScope::Full
            },
        };

        let report = generate(&cameras, &optics, &template, &opts).context("generate failed")?;

        for out in &report.outputs {
            match &out.write {
                WriteResult::Written { path } => {
                    println!("✎  wrote '{}'", path.display());
                }
                WriteResult::WouldWrite { path } => {
                    println!("~  would write '{}'", path.display());
                }
            }
        }

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        println!(
            "{prefix}{} {} footprint file(s) from {} camera(s) x {} optic(s)",
            "✓".green(),
            report.outputs.len(),
            cameras.len(),
            optics.len()
        );

        Ok(())
    }
}
