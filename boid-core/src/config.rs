/// Distance from an edge at which soft containment starts nudging a boid inward
pub const CONTAINMENT_MARGIN: f64 = 100.0;

/// Magnitude of the per-axis containment nudge
pub const TURN_FACTOR: f64 = 1.0;

/// Tunable behavior parameters consumed by every tick.
///
/// Values are assumed valid: positive bounds, speeds and radii, and
/// non-negative weights. The config loader in `boid-shared` checks this
/// before a value reaches the simulation. Between ticks a caller replaces
/// the whole value rather than editing fields in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorConfig {
    pub width: u32,
    pub height: u32,
    pub max_speed: f64,
    pub max_force: f64,
    pub perception_radius: f64,
    pub separation_distance: f64,
    pub cohesion_weight: f64,
    pub alignment_weight: f64,
    pub separation_weight: f64,
}

impl BehaviorConfig {
    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_speed: 4.0,
            max_force: 0.1,
            perception_radius: 50.0,
            separation_distance: 20.0,
            cohesion_weight: 1.0,
            alignment_weight: 1.0,
            separation_weight: 1.5,
        }
    }
}
