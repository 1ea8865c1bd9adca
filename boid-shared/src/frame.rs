use boid_core::{Boid, Vector2D};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Represents a 2D position in simulation space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2D> for Position {
    fn from(v: Vector2D) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Positions of every boid after one tick.
///
/// Serializes as a JSON object keyed `boid_0`, `boid_1`, ... in arena order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRecord {
    pub positions: Vec<Position>,
}

impl FrameRecord {
    pub fn capture(boids: &[Boid]) -> Self {
        Self {
            positions: boids.iter().map(|b| Position::from(b.position)).collect(),
        }
    }

    pub fn key(index: usize) -> String {
        format!("boid_{index}")
    }
}

impl Serialize for FrameRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.positions.len()))?;
        for (index, position) in self.positions.iter().enumerate() {
            map.serialize_entry(&Self::key(index), position)?;
        }
        map.end()
    }
}
