use boid_core::Vector2D;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` string for canvas fill styles
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Blue at rest, green at half speed, red at `max_speed`.
pub fn velocity_to_color(velocity: Vector2D, max_speed: f64) -> Rgb {
    let t = if max_speed > 0.0 {
        (velocity.magnitude() / max_speed).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let r = 255.0 * t;
    let g = 255.0 * (1.0 - (t - 0.5).abs() * 2.0);
    let b = 255.0 * (1.0 - t);
    Rgb::new(r as u8, g as u8, b as u8)
}
