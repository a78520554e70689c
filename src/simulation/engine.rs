//! High-level runtime engine settings
//!
//! Selects the integrator and the optional engulfment stop condition
//! used when running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // verlet or leapfrog
    pub engulf_radius: Option<f64>, // stop when particle 0 comes within this distance of the star
}
