use rand::Rng;

use crate::{BehaviorConfig, Flock};

/// Drives a [`Flock`] tick by tick and holds changes requested by a front
/// end until the next tick boundary.
///
/// Config and boid-count changes are queued and applied at the start of
/// [`Simulation::step`], so a tick always runs against a single config and
/// a stable agent set.
#[derive(Debug)]
pub struct Simulation<R: Rng> {
    flock: Flock,
    rng: R,
    pending_config: Option<BehaviorConfig>,
    pending_count: Option<usize>,
    ticks: u64,
}

impl<R: Rng> Simulation<R> {
    pub fn new(count: usize, config: BehaviorConfig, mut rng: R) -> Self {
        let flock = Flock::random(count, config, &mut rng);
        Self {
            flock,
            rng,
            pending_config: None,
            pending_count: None,
            ticks: 0,
        }
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Config the next tick will use
    pub fn config(&self) -> BehaviorConfig {
        self.pending_config.unwrap_or(self.flock.config)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Queues a replacement config for the next tick.
    pub fn set_config(&mut self, config: BehaviorConfig) {
        self.pending_config = Some(config);
    }

    /// Queues a respawn with `count` boids. Zero and the current size are
    /// ignored.
    pub fn set_boid_count(&mut self, count: usize) {
        self.pending_count = Some(count);
    }

    /// Applies queued changes, then runs one COMPUTE/APPLY tick.
    pub fn step(&mut self) {
        self.apply_pending();
        self.flock.tick();
        self.ticks += 1;
    }

    fn apply_pending(&mut self) {
        if let Some(config) = self.pending_config.take() {
            self.flock.set_config(config);
        }
        if let Some(count) = self.pending_count.take() {
            if count > 0 && count != self.flock.len() {
                self.flock.respawn(count, &mut self.rng);
            }
        }
    }
}
