use boid_core::BehaviorConfig;
use boid_shared::BehaviorSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Cohesion,
    Alignment,
    Separation,
}

/// The UI-editable side of the simulation. Every edit produces a whole new
/// [`BehaviorConfig`] for the next tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub settings: BehaviorSettings,
    pub width: u32,
    pub height: u32,
}

impl Controls {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            settings: BehaviorSettings::default(),
            width,
            height,
        }
    }

    pub fn config(&self) -> BehaviorConfig {
        self.settings.to_core(self.width, self.height)
    }

    /// Ignores negative or non-finite input and keeps the previous value.
    pub fn set_weight(&mut self, weight: Weight, value: f64) -> bool {
        if value.is_finite() && value >= 0.0 {
            let slot = match weight {
                Weight::Cohesion => &mut self.settings.cohesion_weight,
                Weight::Alignment => &mut self.settings.alignment_weight,
                Weight::Separation => &mut self.settings.separation_weight,
            };
            *slot = value;
            true
        } else {
            false
        }
    }

    pub fn set_perception_radius(&mut self, radius: f64) -> bool {
        if radius.is_finite() && radius > 0.0 {
            self.settings.perception_radius = radius;
            true
        } else {
            false
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}
