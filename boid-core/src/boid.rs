use alloc::vec::Vec;

use rand::Rng;

use crate::{behavior, BehaviorConfig, Vector2D};

/// A single flocking agent.
///
/// Boids live in an arena (a slice owned by [`crate::Flock`]) and are
/// addressed by index; the index is what excludes a boid from its own
/// neighbor set.
#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Pending steering for the current tick. Zero outside the
    /// compute/apply window.
    pub acceleration: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::zero(),
        }
    }

    /// Spawns at a uniformly random point inside the bounds, heading in a
    /// uniformly random direction at exactly `max_speed`.
    pub fn random<R: Rng + ?Sized>(config: &BehaviorConfig, rng: &mut R) -> Self {
        let position = Vector2D::new(
            rng.gen_range(0.0..config.width_f64()),
            rng.gen_range(0.0..config.height_f64()),
        );
        let angle = rng.gen_range(0.0..core::f64::consts::TAU);
        let velocity = Vector2D::from_angle(angle) * config.max_speed;
        Self::new(position, velocity)
    }

    /// Every other boid strictly inside `perception_radius`
    pub fn neighbors<'a>(
        &self,
        index: usize,
        flock: &'a [Boid],
        config: &BehaviorConfig,
    ) -> Vec<&'a Boid> {
        flock
            .iter()
            .enumerate()
            .filter(|&(other_index, other)| {
                other_index != index
                    && self.position.distance(&other.position) < config.perception_radius
            })
            .map(|(_, other)| other)
            .collect()
    }

    /// Weighted sum of cohesion, alignment and separation
    pub fn flocking_force(&self, index: usize, flock: &[Boid], config: &BehaviorConfig) -> Vector2D {
        let neighbors = self.neighbors(index, flock, config);

        let coh = behavior::cohesion(self, &neighbors, config) * config.cohesion_weight;
        let ali = behavior::alignment(self, &neighbors, config) * config.alignment_weight;
        let sep = behavior::separation(self, &neighbors, config) * config.separation_weight;

        coh + ali + sep
    }

    /// Flocking force plus soft containment, read from `flock` as it was
    /// before this tick's updates. Does not mutate anything.
    pub fn steering(&self, index: usize, flock: &[Boid], config: &BehaviorConfig) -> Vector2D {
        self.flocking_force(index, flock, config) + behavior::containment(self, config)
    }

    /// COMPUTE phase: stores this tick's steering in `acceleration`.
    ///
    /// `snapshot` must be the pre-update state of the whole flock, with
    /// this boid at `index`.
    pub fn compute_steerings(&mut self, index: usize, snapshot: &[Boid], config: &BehaviorConfig) {
        self.acceleration = self.flocking_force(index, snapshot, config);
        self.keep_in_bounds(config);
    }

    /// Soft containment: nudges the pending acceleration away from edges
    /// closer than `CONTAINMENT_MARGIN`.
    pub fn keep_in_bounds(&mut self, config: &BehaviorConfig) {
        self.acceleration += behavior::containment(self, config);
    }

    /// APPLY phase: integrate, clamp speed, wrap, and clear acceleration.
    pub fn update(&mut self, config: &BehaviorConfig) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(config.max_speed);
        self.position += self.velocity;
        self.wraparound(config);
        self.acceleration = Vector2D::zero();
    }

    /// Toroidal wrap into `[0, width) x [0, height)`.
    pub fn wraparound(&mut self, config: &BehaviorConfig) {
        self.position.x = wrap(self.position.x, config.width_f64());
        self.position.y = wrap(self.position.y, config.height_f64());
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    let mut wrapped = libm::fmod(value, extent);
    if wrapped < 0.0 {
        wrapped += extent;
    }
    // -1e-17 + extent rounds to extent
    if wrapped >= extent {
        wrapped = 0.0;
    }
    wrapped
}
