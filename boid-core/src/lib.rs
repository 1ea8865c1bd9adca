#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Flocking agents ("boids") in a bounded toroidal plane.
//!
//! Each tick runs in two passes over the whole flock: every boid computes
//! its steering from the same pre-tick snapshot, then every boid integrates
//! its own motion. Given a fixed starting flock and config the result is
//! deterministic.

extern crate alloc;

pub mod behavior;
mod boid;
mod config;
mod error;
mod flock;
mod simulation;
mod vector;

pub use boid::Boid;
pub use config::{BehaviorConfig, CONTAINMENT_MARGIN, TURN_FACTOR};
pub use error::VectorError;
pub use flock::Flock;
pub use simulation::Simulation;
pub use vector::Vector2D;
