//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – engine options (integrator, engulfment stop)
//! - [`ParametersConfig`]  – numerical parameters and physical constants
//! - [`PlanetForceConfig`] – orbital parameters of the planet+star force
//! - [`ParticleConfig`]    – initial state for each test particle
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! Every field of [`PlanetForceConfig`] is required: a missing key is a
//! deserialization error, and [`PlanetForceConfig::validate`] rejects
//! non-finite values and non-positive masses before any computation runs.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"      # or "leapfrog"
//!   engulf_radius: 0.004650467260962157   # optional; omit to disable
//!
//! parameters:
//!   t_end: 1000.0             # total simulation time
//!   h0: 0.001                 # fixed step size
//!   out_dt: 10.0              # interval between output samples
//!   G: 39.476926              # gravitational constant (AU, yr, M_sun)
//!
//! planet:
//!   inc: 0.0                  # planet inclination
//!   a_planet: 5.2             # planet semi-major axis
//!   a_star: 0.004963          # star semi-major axis
//!   n: 0.529725               # planet mean motion
//!   m0: 0.0                   # initial planet mean anomaly
//!   m_planet: 0.0009543       # planet mass
//!   m_star: 1.0               # star mass
//!
//! particles:
//!   - x: [ 3.0, 0.0, 0.2 ]
//!     v: [ 0.0, 3.6, 0.0 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced when a scenario configuration fails validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required parameter `{0}` is not finite")]
    NonFinite(&'static str),

    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("particle {index}: `{field}` must have exactly 3 components, got {len}")]
    BadVector {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("scenario has no particles")]
    NoParticles,
}

/// Which integrator method is used by the engine
/// `integrator: "verlet"` or `integrator: "leapfrog"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "verlet")] // Velocity Verlet. Symplectic, two force evaluations per step
    Verlet,

    #[serde(rename = "leapfrog")] // Drift-kick-drift leapfrog, one force evaluation per step
    Leapfrog,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the swarm
    pub engulf_radius: Option<f64>, // Stop when particle 0 comes within this distance of the star; omit to disable
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,  // time end
    pub h0: f64,     // time step size
    pub out_dt: f64, // interval between output samples
    pub G: f64,      // gravitational constant
}

impl ParametersConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("t_end", self.t_end),
            ("h0", self.h0),
            ("out_dt", self.out_dt),
            ("G", self.G),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.h0 <= 0.0 {
            return Err(ConfigError::NonPositive { name: "h0", value: self.h0 });
        }
        if self.out_dt <= 0.0 {
            return Err(ConfigError::NonPositive { name: "out_dt", value: self.out_dt });
        }
        Ok(())
    }
}

/// Orbital parameters of the planet+star force
///
/// All fields are required. `inc` and `a_star` are part of the parameter
/// set but the coplanar force model does not consume them.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetForceConfig {
    pub inc: f64,      // planet inclination
    pub a_planet: f64, // planet semi-major axis
    pub a_star: f64,   // star semi-major axis
    pub n: f64,        // planet mean motion
    pub m0: f64,       // initial planet mean anomaly
    pub m_planet: f64, // planet mass
    pub m_star: f64,   // star mass
}

impl PlanetForceConfig {
    /// Reject non-finite parameters and non-positive masses.
    /// The star mass divides the mass-ratio reflection, so zero is fatal here
    /// rather than a NaN downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("inc", self.inc),
            ("a_planet", self.a_planet),
            ("a_star", self.a_star),
            ("n", self.n),
            ("m0", self.m0),
            ("m_planet", self.m_planet),
            ("m_star", self.m_star),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.m_planet <= 0.0 {
            return Err(ConfigError::NonPositive { name: "m_planet", value: self.m_planet });
        }
        if self.m_star <= 0.0 {
            return Err(ConfigError::NonPositive { name: "m_star", value: self.m_star });
        }
        Ok(())
    }
}

/// Configuration for a single test particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // Initial position vector in simulation units
    pub v: Vec<f64>, // Initial velocity vector in simulation units per time unit
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (integrator, stop condition)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub planet: PlanetForceConfig, // Orbital parameters of the planet+star force
    pub particles: Vec<ParticleConfig>, // Initial states of the test particles
}
