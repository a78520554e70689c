//! Headless simulation driver
//!
//! Advances a `Scenario` with its configured integrator until `t_end`,
//! emitting a state sample every `out_dt` time units and checking the
//! optional engulfment stop condition each step

use tracing::info;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::{leapfrog_integrator, verlet_integrator};
use crate::simulation::scenario::Scenario;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopReason {
    TimeReached, // reached t_end
    Engulfed { t: f64 }, // particle 0 came within the engulfment radius of the star
}

/// Advance the scenario by one step with the configured integrator
pub fn step(scenario: &mut Scenario) {
    match scenario.engine.integrator {
        IntegratorConfig::Verlet => {
            verlet_integrator(&mut scenario.swarm, &scenario.forces, &scenario.parameters)
        }
        IntegratorConfig::Leapfrog => {
            leapfrog_integrator(&mut scenario.swarm, &scenario.forces, &scenario.parameters)
        }
    }
}

/// Run the scenario to completion
///
/// Stops at `t_end`, or earlier if the engulfment condition triggers.
/// Sample rows go to stdout; lifecycle events go to the tracing subscriber.
pub fn run(scenario: &mut Scenario) -> StopReason {
    let t_end = scenario.parameters.t_end;
    let out_dt = scenario.parameters.out_dt;
    let mut next_out = scenario.swarm.t;

    info!(
        particles = scenario.swarm.particles.len(),
        t_end,
        h0 = scenario.parameters.h0,
        "starting run"
    );
    println!("t,x,y,z,r_star");

    loop {
        let t = scenario.swarm.t;

        if let Some(radius) = scenario.engine.engulf_radius {
            let sep = scenario.planet_force.star_separation(t, &scenario.swarm);
            if sep <= radius {
                info!(t, sep, "particle engulfed by star");
                return StopReason::Engulfed { t };
            }
        }

        if t >= next_out {
            let p = &scenario.swarm.particles[0];
            let sep = scenario.planet_force.star_separation(t, &scenario.swarm);
            println!("{:.6},{:.9},{:.9},{:.9},{:.9}", t, p.x.x, p.x.y, p.x.z, sep);
            next_out += out_dt;
        }

        if t >= t_end {
            info!(t, "reached end time");
            return StopReason::TimeReached;
        }

        step(scenario);
    }
}
