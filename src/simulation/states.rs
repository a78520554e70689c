//! Core state types for the test-particle simulation.
//!
//! Defines the massless particle and the swarm that holds them:
//! - `Particle` using `NVec3`
//! - `Swarm` with the particle list and the current simulation time `t`
//!
//! Particles carry no mass or radius: they feel forces but exert none.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

#[derive(Debug, Clone)]
pub struct Swarm {
    pub particles: Vec<Particle>, // collection of test particles
    pub t: f64, // time
}
