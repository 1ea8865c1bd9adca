//! Steering rules. Each function returns an unweighted steering force whose
//! magnitude never exceeds `config.max_force`.

use crate::{Boid, BehaviorConfig, Vector2D, CONTAINMENT_MARGIN, TURN_FACTOR};

/// Turns a desired heading into a bounded steering delta
pub fn steer_towards(boid: &Boid, heading: Vector2D, config: &BehaviorConfig) -> Vector2D {
    let desired = heading.normalize() * config.max_speed;
    let steering = desired - boid.velocity;
    steering.limit(config.max_force)
}

/// Steer toward the mean position of the neighbors
pub fn cohesion(boid: &Boid, neighbors: &[&Boid], config: &BehaviorConfig) -> Vector2D {
    if neighbors.is_empty() {
        return Vector2D::zero();
    }

    let mut sum = Vector2D::zero();
    for other in neighbors {
        sum += other.position;
    }
    let center = sum / neighbors.len() as f64;

    steer_towards(boid, center - boid.position, config)
}

/// Steer toward the mean velocity of the neighbors
pub fn alignment(boid: &Boid, neighbors: &[&Boid], config: &BehaviorConfig) -> Vector2D {
    if neighbors.is_empty() {
        return Vector2D::zero();
    }

    let mut sum = Vector2D::zero();
    for other in neighbors {
        sum += other.velocity;
    }
    let average = sum / neighbors.len() as f64;

    steer_towards(boid, average, config)
}

/// Steer away from neighbors closer than `separation_distance`, weighting
/// each by inverse distance. Coincident neighbors are skipped.
pub fn separation(boid: &Boid, neighbors: &[&Boid], config: &BehaviorConfig) -> Vector2D {
    let mut steering = Vector2D::zero();
    let mut count = 0usize;

    for other in neighbors {
        let distance = boid.position.distance(&other.position);
        if distance > 0.0 && distance < config.separation_distance {
            let away = (boid.position - other.position).normalize() / distance;
            steering += away;
            count += 1;
        }
    }

    if count > 0 {
        steering = steering / count as f64;
    }

    if steering.magnitude() > 0.0 {
        steer_towards(boid, steering, config)
    } else {
        Vector2D::zero()
    }
}

/// Inward nudge for a boid within `CONTAINMENT_MARGIN` of an edge
pub fn containment(boid: &Boid, config: &BehaviorConfig) -> Vector2D {
    let width = config.width_f64();
    let height = config.height_f64();
    let mut nudge = Vector2D::zero();

    // The low edge wins when both margins overlap in a narrow space.
    if boid.position.x < CONTAINMENT_MARGIN {
        nudge.x += TURN_FACTOR;
    } else if boid.position.x > width - CONTAINMENT_MARGIN {
        nudge.x -= TURN_FACTOR;
    }
    if boid.position.y < CONTAINMENT_MARGIN {
        nudge.y += TURN_FACTOR;
    } else if boid.position.y > height - CONTAINMENT_MARGIN {
        nudge.y -= TURN_FACTOR;
    }

    nudge
}
