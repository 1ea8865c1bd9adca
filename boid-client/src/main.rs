use std::path::PathBuf;

use anyhow::{Context, Result};
use boid_shared::SimulationConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid simulation", long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Override the number of frames to simulate
    #[arg(short, long)]
    frames: Option<usize>,

    /// Override the RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the directory the frame file is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Loading config from {}", args.config.display());
    let mut config = SimulationConfig::from_path(&args.config).context("Config could not be loaded")?;

    if let Some(frames) = args.frames {
        config.simulation.frames = frames;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(dir) = args.output_dir {
        config.output.output_dir = dir;
    }

    let path = boid_client::run_headless(&config).context("Simulation failed")?;
    log::info!("Simulation complete. Output written to {}", path.display());

    Ok(())
}
