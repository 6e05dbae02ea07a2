//! Fovgen — field-of-view footprint generator for the Aladin sky atlas.
//!
//! Generates `.vot` files describing the field of view of a camera behind a
//! telescope. Load them in Aladin to show the fov outline on the sky map.
//! Built for the case where multiple cameras and telescopes are combined
//! (cartesian product).
//!
//! # Usage
//!
//! ```text
//! fovgen generate [--out-dir <dir>] [--cameras <csv>] [--optics <csv>]
//!                 [--template <xml>] [--dry-run] [--first-only]
//! fovgen list [--cameras <csv>] [--optics <csv>] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{generate::GenerateArgs, list::ListArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "fovgen",
    version,
    about = "Generate Aladin field-of-view footprint (.vot) files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and write one .vot footprint per camera-optic pairing.
    Generate(GenerateArgs),

    /// Tabulate every pairing with its computed half-fields; writes nothing.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
