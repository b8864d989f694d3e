//! Frame generator CLI.
//!
//! Builds the triangulated frame model from a placement config (the
//! built-in 14-inch defaults, or a TOML override) and writes it as
//! binary STL.
//!
//! ```text
//! framegen                         # defaults -> quad_frame_14in.stl
//! framegen -o custom.stl -c my.toml -v
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use frame_assembly::{build_frame, FrameConfig};
use frame_io::save_stl;

/// Label written into the 80-byte STL header.
const STL_LABEL: &str = "HydroAvia 14in quad frame";

/// Generate a multi-rotor frame STL.
#[derive(Parser)]
#[command(name = "framegen")]
#[command(about = "Generate a multi-rotor frame STL", long_about = None)]
#[command(version)]
struct Cli {
    /// Output STL path
    #[arg(short, long, default_value = "quad_frame_14in.stl")]
    output: PathBuf,

    /// Placement config (TOML); missing fields fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging (per-feature triangle counts)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => FrameConfig::default(),
    };

    let frame = build_frame(&config);
    let size = frame.bounds().size();
    info!(
        triangles = frame.triangle_count(),
        width_mm = size.x,
        depth_mm = size.y,
        height_mm = size.z,
        "frame built"
    );

    save_stl(&frame, &cli.output, STL_LABEL)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "STL written");

    Ok(())
}
