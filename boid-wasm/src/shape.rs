use boid_core::Vector2D;

/// Plane silhouette pointing along +x, in pixels relative to the boid
pub const PLANE_SHAPE: [(f64, f64); 5] = [(12.0, 0.0), (-8.0, -6.0), (-4.0, -2.0), (-4.0, 2.0), (-8.0, 6.0)];

/// The plane outline rotated to the heading of `velocity` and placed at
/// `position`
pub fn plane_outline(position: Vector2D, velocity: Vector2D) -> [(f64, f64); 5] {
    let angle = velocity.y.atan2(velocity.x);
    let (sin, cos) = angle.sin_cos();

    PLANE_SHAPE.map(|(x, y)| (position.x + x * cos - y * sin, position.y + x * sin + y * cos))
}
