//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - swarm state (`Swarm` with particles at t = 0)
//! - active force set (`AccelSet`) and the planet+star term used for
//!   ephemeris and stop-condition queries
//!
//! Construction fails fast: an invalid or missing parameter is reported as
//! a `ConfigError` before any force is evaluated.

use crate::configuration::config::{ConfigError, ParticleConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, PlanetStarGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, Swarm};

/// Fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current swarm state, and
/// the set of active force laws. `planet_force` is the same term that sits
/// in `forces`, kept separately so the driver can query body positions and
/// the star separation without going through the accumulator.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub swarm: Swarm,
    pub forces: AccelSet,
    pub planet_force: PlanetStarGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.parameters.validate()?;
        cfg.planet.validate()?;

        if cfg.particles.is_empty() {
            return Err(ConfigError::NoParticles);
        }

        // Particles: map `ParticleConfig` -> runtime `Particle` using nalgebra vectors
        let particles = cfg
            .particles
            .iter()
            .enumerate()
            .map(|(i, pc)| particle_from_config(i, pc))
            .collect::<Result<Vec<Particle>, ConfigError>>()?;

        // Initial swarm state: particles at t = 0
        let swarm = Swarm {
            particles,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            out_dt: p_cfg.out_dt,
            G: p_cfg.G,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            engulf_radius: e_cfg.engulf_radius,
        };

        // Forces: the planet+star term, registered in an AccelSet
        let f_cfg = cfg.planet;
        let planet_force = PlanetStarGravity {
            G: parameters.G,
            inc: f_cfg.inc,
            a_planet: f_cfg.a_planet,
            a_star: f_cfg.a_star,
            n: f_cfg.n,
            m0: f_cfg.m0,
            m_planet: f_cfg.m_planet,
            m_star: f_cfg.m_star,
        };
        let forces = AccelSet::new().with(planet_force.clone());

        Ok(Self {
            engine,
            parameters,
            swarm,
            forces,
            planet_force,
        })
    }
}

fn particle_from_config(index: usize, pc: &ParticleConfig) -> Result<Particle, ConfigError> {
    if pc.x.len() != 3 {
        return Err(ConfigError::BadVector { index, field: "x", len: pc.x.len() });
    }
    if pc.v.len() != 3 {
        return Err(ConfigError::BadVector { index, field: "v", len: pc.v.len() });
    }
    Ok(Particle {
        x: NVec3::new(pc.x[0], pc.x[1], pc.x[2]),
        v: NVec3::new(pc.v[0], pc.v[1], pc.v[2]),
    })
}
