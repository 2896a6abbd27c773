//! Cubeview Terminal - Projected wireframe cube
//!
//! Prints the screen-space segments of a rotating cube, one block per frame.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use cubeview_terminal::{write_frames, OutputFormat, Scene, ViewerConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "cubeview-terminal")]
#[command(about = "Project a rotating wireframe cube onto a 2D viewport")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to emit
    #[arg(short, long)]
    frames: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Distance from the camera to its viewport
    #[arg(long)]
    distance: Option<f64>,

    /// Side length of the cube
    #[arg(long)]
    side: Option<f64>,

    /// Screen width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Screen height in pixels
    #[arg(long)]
    height: Option<u32>,
}

impl Cli {
    fn apply(&self, config: &mut ViewerConfig) {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(distance) = self.distance {
            config.camera.viewport_distance = distance;
        }
        if let Some(side) = self.side {
            config.cuboid.side_length = side;
        }
        if let Some(width) = self.width {
            config.screen.width = width;
        }
        if let Some(height) = self.height {
            config.screen.height = height;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    cli.apply(&mut config);
    config.validate().context("Invalid command line override")?;

    info!(
        frames = config.frames,
        viewport_distance = config.camera.viewport_distance,
        side_length = config.cuboid.side_length,
        "Starting projection"
    );

    let mut scene = Scene::from_config(&config);
    let frames = scene.run(config.frames);

    let mut stdout = io::stdout().lock();
    write_frames(&mut stdout, &frames, cli.format).context("Failed to write frames")?;
    stdout.flush()?;

    info!("Projected {} frames", frames.len());
    Ok(())
}
