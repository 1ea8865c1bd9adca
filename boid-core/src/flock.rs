use alloc::vec::Vec;

use rand::Rng;

use crate::{BehaviorConfig, Boid, Vector2D};

/// The agent arena and the config it is stepped with.
///
/// A tick is two complete passes: every boid computes its steering from
/// the unchanged flock, then every boid integrates. No boid sees a
/// neighbor's post-update state during its own steering computation.
#[derive(Debug, Clone)]
pub struct Flock {
    pub boids: Vec<Boid>,
    pub config: BehaviorConfig,
}

impl Flock {
    pub fn new(config: BehaviorConfig) -> Self {
        Self {
            boids: Vec::new(),
            config,
        }
    }

    pub fn with_boids(boids: Vec<Boid>, config: BehaviorConfig) -> Self {
        Self { boids, config }
    }

    pub fn random<R: Rng + ?Sized>(count: usize, config: BehaviorConfig, rng: &mut R) -> Self {
        let boids = (0..count).map(|_| Boid::random(&config, rng)).collect();
        Self { boids, config }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Discards every boid and spawns `count` fresh ones.
    pub fn respawn<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.boids = (0..count).map(|_| Boid::random(&self.config, rng)).collect();
    }

    /// Replaces the config wholesale. Call between ticks only.
    pub fn set_config(&mut self, config: BehaviorConfig) {
        self.config = config;
    }

    /// One full tick: COMPUTE for all boids, then APPLY for all boids.
    pub fn tick(&mut self) {
        self.compute_phase();
        self.apply_phase();
    }

    pub fn tick_n(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Steering of every boid against the current, unmodified flock.
    #[cfg(feature = "parallel")]
    pub fn steerings(&self) -> Vec<Vector2D> {
        use rayon::prelude::*;

        self.boids
            .par_iter()
            .enumerate()
            .map(|(index, boid)| boid.steering(index, &self.boids, &self.config))
            .collect()
    }

    /// Steering of every boid against the current, unmodified flock.
    #[cfg(not(feature = "parallel"))]
    pub fn steerings(&self) -> Vec<Vector2D> {
        self.serial_steerings()
    }

    #[cfg(any(not(feature = "parallel"), test))]
    fn serial_steerings(&self) -> Vec<Vector2D> {
        self.boids
            .iter()
            .enumerate()
            .map(|(index, boid)| boid.steering(index, &self.boids, &self.config))
            .collect()
    }

    fn compute_phase(&mut self) {
        // Collected before any write so every boid reads the same snapshot.
        let steerings = self.steerings();
        for (boid, steering) in self.boids.iter_mut().zip(steerings) {
            boid.acceleration = steering;
        }
    }

    fn apply_phase(&mut self) {
        let config = self.config;
        for boid in self.boids.iter_mut() {
            boid.update(&config);
        }
    }
}
