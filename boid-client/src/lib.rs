use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use boid_core::Simulation;
use boid_shared::{FrameRecord, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Writes one compact JSON object per frame, newline-terminated
pub struct FrameWriter<W: Write> {
    writer: W,
    frames: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn write_frame(&mut self, frame: &FrameRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, frame).context("Failed to serialize frame")?;
        self.writer.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Seeded from the config when it carries a seed, from OS entropy otherwise
pub fn build_simulation(config: &SimulationConfig) -> Simulation<ChaCha8Rng> {
    let rng = match config.simulation.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    Simulation::new(config.simulation.boid_count, config.behavior(), rng)
}

/// Steps `frames` ticks, recording every boid's position after each tick.
pub fn run_frames<W: Write>(
    simulation: &mut Simulation<ChaCha8Rng>,
    frames: usize,
    out: &mut FrameWriter<W>,
) -> Result<()> {
    for frame in 0..frames {
        simulation.step();
        out.write_frame(&FrameRecord::capture(&simulation.flock().boids))
            .with_context(|| format!("Failed to write frame {}", frame))?;

        if (frame + 1) % 100 == 0 {
            log::debug!("Simulated {}/{} frames", frame + 1, frames);
        }
    }
    Ok(())
}

pub fn output_file_name(frames: usize, timestamp: u64) -> String {
    format!("out_frames{}_time{}.json", frames, timestamp)
}

/// Runs the whole headless simulation and returns the JSON-lines file path.
pub fn run_headless(config: &SimulationConfig) -> Result<PathBuf> {
    let output_dir = &config.output.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?
        .as_secs();
    let path = output_dir.join(output_file_name(config.simulation.frames, timestamp));

    write_run(config, &path)?;
    Ok(path)
}

fn write_run(config: &SimulationConfig, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    log::info!(
        "Simulating {} boids for {} frames in a {}x{} space",
        config.simulation.boid_count,
        config.simulation.frames,
        config.simulation.space_width,
        config.simulation.space_height
    );

    let mut simulation = build_simulation(config);
    let mut out = FrameWriter::new(BufWriter::new(file));
    run_frames(&mut simulation, config.simulation.frames, &mut out)?;

    log::debug!("Wrote {} frames", out.frames_written());
    out.finish()?;
    Ok(())
}
