//! Fixed-step time integrators for the test-particle swarm
//!
//! Provides velocity-Verlet and a single-force-eval leapfrog, both driven
//! by an `AccelSet` and `Parameters`

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, Swarm};

/// Advance the swarm by one step using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `swarm.t` in-place with fixed step `dt = params.h0`
pub fn verlet_integrator(swarm: &mut Swarm, forces: &AccelSet, params: &Parameters) {
    let n = swarm.particles.len();
    if n == 0 { // no particles, return
        return;
    }

    let dt = params.h0; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from x_n at time t_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.accumulate_accels(swarm.t, &*swarm, &mut a_old);

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
    for (p, a) in swarm.particles.iter_mut().zip(a_old.iter()) {
        p.v += half_dt * *a;
    }

    // Drift: full-step position: x_n+1 = x_n + dt v_n+1/2
    for p in swarm.particles.iter_mut() {
        p.x += dt * p.v;
    }

    // advance time: t_n+1 = t_n + dt
    swarm.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.accumulate_accels(swarm.t, &*swarm, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (p, a) in swarm.particles.iter_mut().zip(a_new.iter()) {
        p.v += half_dt * *a;
    }
}

/// Advance the swarm by one step using a single-force-eval leapfrog
/// Uses one force evaluation per step and updates positions, velocities,
/// and `swarm.t` in-place with fixed step `dt = params.h0`
pub fn leapfrog_integrator(swarm: &mut Swarm, forces: &AccelSet, params: &Parameters) {
    let n = swarm.particles.len();
    if n == 0 { // no particles, return
        return;
    }
    let dt = params.h0; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // Drift: x_half = x_n + (dt/2) * v_n
    for p in swarm.particles.iter_mut() {
        p.x += half_dt * p.v;
    }

    // advance half time (t_n + dt/2)
    let t_mid = swarm.t + half_dt;

    // compute a_mid from x_half
    let mut a_mid = vec![NVec3::zeros(); n];

    // Kick: v_n+1 = v_n + dt * a_mid
    forces.accumulate_accels(t_mid, &*swarm, &mut a_mid);
    for (p, a) in swarm.particles.iter_mut().zip(a_mid.iter()) {
        p.v += dt * *a;
    }

    // Second drift: x_n+1 = x_half + dt/2 * v_n+1
    for p in swarm.particles.iter_mut() {
        p.x += half_dt * p.v;
    }

    // finish advancing time: t_n+1 = t_n + dt
    swarm.t += dt;
}
