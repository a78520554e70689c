//! Closed-form circular-orbit ephemeris for the planet and its star
//!
//! The perturbing bodies are never integrated: the planet sits on a circle
//! of radius `a_p` in the z = 0 plane, parameterized by the mean anomaly,
//! and the star is its center-of-mass reflection. Also provides the
//! inverse-square point-mass kernel shared by both contributions.

use crate::simulation::states::NVec3;

/// Mean anomaly at time `t` for mean motion `n` and initial anomaly `m0`
pub fn mean_anomaly(n: f64, m0: f64, t: f64) -> f64 {
    n * t + m0
}

/// Planet position on a circle of radius `a_p` in the z = 0 plane
pub fn planet_position(a_p: f64, phase: f64) -> NVec3 {
    NVec3::new(a_p * phase.cos(), a_p * phase.sin(), 0.0)
}

/// Star position from momentum balance: the mass-weighted positions of
/// planet and star sum to zero, so the star is the planet scaled by
/// `-m_planet / m_star`. Stays in the z = 0 plane.
pub fn star_position(planet: &NVec3, m_planet: f64, m_star: f64) -> NVec3 {
    let mass_ratio = -m_planet / m_star;
    mass_ratio * planet
}

/// Acceleration on a particle at `p` from a point mass at `body` with
/// gravitational parameter `gm = G * m`.
///
/// a = -gm / |d|^3 * d, with d the displacement from body to particle.
/// A zero separation divides by zero and yields non-finite components;
/// that is deliberate and the caller must not mask it.
pub fn point_mass_accel(gm: f64, body: &NVec3, p: &NVec3) -> NVec3 {
    let d = p - body;
    let dist = d.norm();
    let d3 = dist * dist * dist;
    (-gm / d3) * d
}
