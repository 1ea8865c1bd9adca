use boid_core::{behavior, BehaviorConfig, Boid, Flock, Vector2D};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn interior_config() -> BehaviorConfig {
    BehaviorConfig {
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

/// A tight cluster in the middle of the space so every boid has neighbors.
fn cluster() -> Vec<Boid> {
    vec![
        Boid::new(Vector2D::new(400.0, 300.0), Vector2D::new(1.0, 0.5)),
        Boid::new(Vector2D::new(405.0, 302.0), Vector2D::new(-0.5, 2.0)),
        Boid::new(Vector2D::new(398.0, 310.0), Vector2D::new(0.0, -3.0)),
        Boid::new(Vector2D::new(420.0, 295.0), Vector2D::new(2.5, 1.0)),
        Boid::new(Vector2D::new(410.0, 315.0), Vector2D::new(-1.0, -1.0)),
    ]
}

/// Position and velocity of every boid, in arena order
fn motion(boids: &[Boid]) -> Vec<(Vector2D, Vector2D)> {
    boids.iter().map(|b| (b.position, b.velocity)).collect()
}

#[test]
fn separation_pushes_close_pair_apart() {
    let config = BehaviorConfig {
        cohesion_weight: 0.0,
        alignment_weight: 0.0,
        separation_weight: 1.0,
        ..interior_config()
    };
    let boids = vec![
        Boid::new(Vector2D::new(400.0, 300.0), Vector2D::zero()),
        Boid::new(Vector2D::new(401.0, 300.0), Vector2D::zero()),
    ];
    let mut flock = Flock::with_boids(boids, config);
    let before = flock.boids[0].position.distance(&flock.boids[1].position);

    flock.tick();

    let after = flock.boids[0].position.distance(&flock.boids[1].position);
    assert_eq!(before, 1.0);
    assert!(after > before, "distance went from {before} to {after}");
}

#[test]
fn wraparound_from_right_edge() {
    let config = BehaviorConfig {
        width: 100,
        height: 100,
        max_speed: 5.0,
        ..interior_config()
    };
    let mut boid = Boid::new(Vector2D::new(99.5, 50.0), Vector2D::new(5.0, 0.0));
    boid.update(&config);
    assert_eq!(boid.position.x, 4.5);
}

#[test]
fn identical_runs_are_bit_identical() {
    let config = interior_config();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let start = Flock::random(40, config, &mut rng).boids;

    let mut first = Flock::with_boids(start.clone(), config);
    let mut second = Flock::with_boids(start, config);

    for _ in 0..200 {
        first.tick();
        second.tick();
        for (a, b) in first.boids.iter().zip(&second.boids) {
            assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
            assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
            assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
        }
    }
}

#[test]
fn same_seed_spawns_same_flock() {
    let config = interior_config();
    let a = Flock::random(30, config, &mut ChaCha8Rng::seed_from_u64(5));
    let b = Flock::random(30, config, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(motion(&a.boids), motion(&b.boids));
}

#[test]
fn tick_reads_pre_update_snapshot() {
    let config = interior_config();
    let start = cluster();

    // Reference: every steering from the untouched flock, then every update.
    let snapshot = start.clone();
    let mut reference = start.clone();
    for (index, boid) in reference.iter_mut().enumerate() {
        boid.compute_steerings(index, &snapshot, &config);
    }
    for boid in reference.iter_mut() {
        boid.update(&config);
    }

    let mut flock = Flock::with_boids(start, config);
    flock.tick();

    assert_eq!(motion(&flock.boids), motion(&reference));
    assert!(flock.boids.iter().all(|b| b.acceleration == Vector2D::zero()));
}

#[test]
fn steering_ignores_updates_made_after_snapshot() {
    let config = interior_config();
    let snapshot = cluster();
    let expected = snapshot[0].steering(0, &snapshot, &config);

    // Interleaving APPLY for boid 1 before boid 0's COMPUTE changes what
    // boid 0 would see.
    let mut interleaved = snapshot.clone();
    interleaved[1].compute_steerings(1, &snapshot, &config);
    interleaved[1].update(&config);
    let racy = interleaved[0].steering(0, &interleaved, &config);
    assert_ne!(racy, expected);

    // Computing against the snapshot is unaffected by that update.
    let mut boid = interleaved[0].clone();
    boid.compute_steerings(0, &snapshot, &config);
    assert_eq!(boid.acceleration, expected);
}

#[test]
fn tick_is_independent_of_arena_order() {
    let config = interior_config();
    let start = cluster();

    let mut forward = Flock::with_boids(start.clone(), config);
    let mut reversed = Flock::with_boids(start.into_iter().rev().collect(), config);
    forward.tick();
    reversed.tick();

    for (a, b) in forward.boids.iter().zip(reversed.boids.iter().rev()) {
        assert!(a.position.distance(&b.position) < 1e-9);
        assert!(a.velocity.distance(&b.velocity) < 1e-9);
    }
}

#[test]
fn acceleration_is_zero_between_ticks() {
    let mut flock = Flock::with_boids(cluster(), interior_config());
    for _ in 0..10 {
        flock.tick();
        assert!(flock.boids.iter().all(|b| b.acceleration == Vector2D::zero()));
    }
}

fn vector(range: f64) -> impl Strategy<Value = Vector2D> {
    (-range..range, -range..range).prop_map(|(x, y)| Vector2D::new(x, y))
}

proptest! {
    #[test]
    fn steering_rules_respect_max_force(
        velocity in vector(6.0),
        offsets in proptest::collection::vec((vector(30.0), vector(6.0)), 0..12),
        max_force in 0.01f64..2.0,
    ) {
        let config = BehaviorConfig { max_force, ..interior_config() };
        let boid = Boid::new(Vector2D::new(400.0, 300.0), velocity);
        let others: Vec<Boid> = offsets
            .into_iter()
            .map(|(offset, v)| Boid::new(boid.position + offset, v))
            .collect();
        let neighbors: Vec<&Boid> = others.iter().collect();

        let limit = max_force + 1e-9;
        prop_assert!(behavior::cohesion(&boid, &neighbors, &config).magnitude() <= limit);
        prop_assert!(behavior::alignment(&boid, &neighbors, &config).magnitude() <= limit);
        prop_assert!(behavior::separation(&boid, &neighbors, &config).magnitude() <= limit);
    }

    #[test]
    fn flock_stays_in_bounds_and_under_max_speed(
        seed in any::<u64>(),
        count in 1usize..40,
        ticks in 1usize..60,
        width in 50u32..400,
        height in 50u32..400,
    ) {
        let config = BehaviorConfig { width, height, ..interior_config() };
        let mut flock = Flock::random(count, config, &mut ChaCha8Rng::seed_from_u64(seed));

        for _ in 0..ticks {
            flock.tick();
            for boid in &flock.boids {
                prop_assert!(boid.velocity.magnitude() <= config.max_speed + 1e-9);
                prop_assert!(boid.position.x >= 0.0 && boid.position.x < f64::from(width));
                prop_assert!(boid.position.y >= 0.0 && boid.position.y < f64::from(height));
            }
        }
    }
}
