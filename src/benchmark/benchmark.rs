use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, PlanetStarGravity};
use crate::simulation::integrator::verlet_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, Swarm};

/// Helper to build a manual Swarm of size `n`
fn make_swarm(n: usize) -> Swarm {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0 + 6.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 0.5,
        );

        particles.push(Particle {
            x,
            v: NVec3::zeros(),
        });
    }

    Swarm { particles, t: 0.0 }
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        out_dt: 10.0,
        G: 1.0,
    }
}

fn make_force(params: &Parameters) -> PlanetStarGravity {
    PlanetStarGravity {
        G: params.G,
        inc: 0.0,
        a_planet: 1.0,
        a_star: 0.001,
        n: 1.0,
        m0: 0.0,
        m_planet: 0.001,
        m_star: 1.0,
    }
}

/// Time a single force accumulation pass over a range of swarm sizes
pub fn bench_force() {
    let ns = [1, 100, 1000, 10000, 100000];
    let reps = 1000; // repetitions per size to get above timer resolution

    for n in ns {
        let swarm = make_swarm(n);
        let params = make_params();
        let force = make_force(&params);

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        force.acceleration(0.0, &swarm, &mut out);

        let t0 = Instant::now();
        for i in 0..reps {
            force.acceleration(i as f64 * params.h0, &swarm, &mut out);
        }
        let per_eval = t0.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:6}, force eval = {:10.3e} s", per_eval);
    }
}

/// Benchmark verlet steps per second over a range of swarm sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_verlet() {
    println!("N,step_us");

    let steps = 1000;

    for n in [1, 100, 1000, 10000, 100000] {
        let mut swarm = make_swarm(n);
        let params = make_params();
        let forces = AccelSet::new().with(make_force(&params));

        // Warm-up
        verlet_integrator(&mut swarm, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut swarm, &forces, &params);
        }
        let step_us = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

        println!("{},{:.3}", n, step_us);
    }
}
