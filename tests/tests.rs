use tpsim::simulation::forces::{AccelSet, Acceleration, PlanetStarGravity};
use tpsim::simulation::orbit::point_mass_accel;
use tpsim::simulation::params::Parameters;
use tpsim::simulation::states::{NVec3, Particle, Swarm};
use tpsim::{ConfigError, PlanetForceConfig, Scenario, ScenarioConfig, StopReason};

use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Planet+star term with the reference parameters: unit-radius circular
/// orbit, unit mean motion, thousandth-mass planet around a unit-mass star
pub fn test_force() -> PlanetStarGravity {
    PlanetStarGravity {
        G: 1.0,
        inc: 0.0,
        a_planet: 1.0,
        a_star: 0.001,
        n: 1.0,
        m0: 0.0,
        m_planet: 0.001,
        m_star: 1.0,
    }
}

/// Build a swarm holding a single particle at rest at `x`
pub fn one_particle_swarm(x: [f64; 3]) -> Swarm {
    Swarm {
        particles: vec![Particle {
            x: x.into(),
            v: NVec3::zeros(),
        }],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        out_dt: 0.1,
        G: 1.0,
    }
}

/// Minimal valid scenario YAML; tests patch pieces of it as needed
fn scenario_yaml() -> &'static str {
    "
engine:
  integrator: \"verlet\"

parameters:
  t_end: 0.01
  h0: 0.001
  out_dt: 0.005
  G: 1.0

planet:
  inc: 0.0
  a_planet: 1.0
  a_star: 0.001
  n: 1.0
  m0: 0.0
  m_planet: 0.001
  m_star: 1.0

particles:
  - x: [ 2.0, 0.0, 0.0 ]
    v: [ 0.0, 0.7, 0.0 ]
"
}

// ==================================================================================
// Orbit geometry tests
// ==================================================================================

#[test]
fn planet_stays_on_circle_in_plane() {
    let f = test_force();

    for t in [0.0, 0.3, 1.7, 4.0, 123.456] {
        let p = f.planet_position_at(t);
        assert_relative_eq!(
            p.x * p.x + p.y * p.y,
            f.a_planet * f.a_planet,
            epsilon = 1e-12
        );
        assert_eq!(p.z, 0.0);
    }
}

#[test]
fn center_of_mass_stays_at_origin() {
    let f = test_force();

    for t in [0.0, 0.9, 2.5, 17.0] {
        let planet = f.planet_position_at(t);
        let star = f.star_position_at(t);
        let com = f.m_planet * planet + f.m_star * star;
        assert!(com.norm() < 1e-12, "COM drifted: {:?}", com);
    }
}

#[test]
fn zero_phase_puts_planet_on_x_axis() {
    // n*t + m0 = 0 at t = 2 for m0 = -2
    let f = PlanetStarGravity {
        m0: -2.0,
        ..test_force()
    };

    let p = f.planet_position_at(2.0);
    assert_relative_eq!(p, NVec3::new(f.a_planet, 0.0, 0.0), epsilon = 1e-12);
}

// ==================================================================================
// Force evaluator tests
// ==================================================================================

#[test]
fn reference_scenario_acceleration() {
    // G=1, t=0: planet at (1,0,0), star at (-0.001,0,0), particle at (2,0,0).
    // Planet pulls with 0.001/1^2, star with 1/2.001^2, both along -x.
    let f = test_force();
    let swarm = one_particle_swarm([2.0, 0.0, 0.0]);

    let mut out = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut out);

    let expected_x = -(0.001 / 1.0 + 1.0 / (2.001 * 2.001));
    assert_abs_diff_eq!(out[0].x, expected_x, epsilon = 1e-12);
    assert_abs_diff_eq!(out[0].y, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(out[0].z, 0.0, epsilon = 1e-15);
}

#[test]
fn point_mass_inverse_square_law() {
    let body = NVec3::zeros();
    let a_r = point_mass_accel(1.0, &body, &NVec3::new(1.0, 0.0, 0.0));
    let a_2r = point_mass_accel(1.0, &body, &NVec3::new(2.0, 0.0, 0.0));

    let ratio = a_r.norm() / a_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-12, "Expected ~4x, got {}", ratio);
}

#[test]
fn acceleration_points_toward_bodies() {
    let f = test_force();
    let swarm = one_particle_swarm([0.3, 2.1, -0.4]);
    let p = swarm.particles[0].x;

    let mut out = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut out);

    // Attractive: acceleration has negative projection on body->particle
    // displacement, for both bodies individually and hence for their sum
    for body in [f.planet_position_at(0.0), f.star_position_at(0.0)] {
        let d = p - body;
        let a = point_mass_accel(1.0, &body, &p);
        assert!(a.dot(&d) < 0.0, "Acceleration is not toward body");
    }
    let d_star = p - f.star_position_at(0.0);
    assert!(out[0].dot(&d_star) < 0.0, "Net pull is not toward the star");
}

#[test]
fn contributions_accumulate_into_buffer() {
    let f = test_force();
    let swarm = one_particle_swarm([2.0, 0.0, 0.0]);

    let mut single = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut single);

    // The trait contract is +=, so a second application doubles the value
    let mut twice = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut twice);
    f.acceleration(0.0, &swarm, &mut twice);

    assert_eq!(twice[0], 2.0 * single[0]);
}

#[test]
fn evaluation_is_pure() {
    let f = test_force();
    let swarm = one_particle_swarm([1.3, -0.2, 0.05]);

    let mut a = vec![NVec3::zeros(); 1];
    let mut b = vec![NVec3::zeros(); 1];
    f.acceleration(0.7, &swarm, &mut a);
    f.acceleration(0.7, &swarm, &mut b);

    // bit-identical, not merely close
    assert_eq!(a[0], b[0]);
}

#[test]
fn only_first_particle_is_affected() {
    let f = test_force();
    let mut swarm = one_particle_swarm([2.0, 0.0, 0.0]);
    swarm.particles.push(Particle {
        x: NVec3::new(-3.0, 1.0, 0.0),
        v: NVec3::zeros(),
    });

    let mut out = vec![NVec3::zeros(); 2];
    f.acceleration(0.0, &swarm, &mut out);

    assert!(out[0].norm() > 0.0);
    assert_eq!(out[1], NVec3::zeros());
}

#[test]
fn coincident_particle_yields_non_finite() {
    let f = test_force();
    // particle exactly on the planet at t = 0
    let swarm = one_particle_swarm([1.0, 0.0, 0.0]);

    let mut out = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut out);

    // zero separation divides by zero; the fault must stay visible
    assert!(!out[0].x.is_finite(), "degenerate separation was masked: {:?}", out[0]);
}

#[test]
fn accel_set_zeroes_stale_values() {
    let f = test_force();
    let swarm = one_particle_swarm([2.0, 0.0, 0.0]);
    let forces = AccelSet::new().with(f.clone());

    let mut direct = vec![NVec3::zeros(); 1];
    f.acceleration(0.0, &swarm, &mut direct);

    let mut out = vec![NVec3::new(9.0, -9.0, 9.0); 1];
    forces.accumulate_accels(0.0, &swarm, &mut out);

    assert_eq!(out[0], direct[0]);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn missing_parameter_is_a_deserialization_error() {
    // m_star left out
    let yaml = "
inc: 0.0
a_planet: 1.0
a_star: 0.001
n: 1.0
m0: 0.0
m_planet: 0.001
";
    let parsed: Result<PlanetForceConfig, _> = serde_yaml::from_str(yaml);
    assert!(parsed.is_err(), "missing m_star should not deserialize");
}

#[test]
fn zero_star_mass_is_rejected() {
    let cfg = PlanetForceConfig {
        inc: 0.0,
        a_planet: 1.0,
        a_star: 0.001,
        n: 1.0,
        m0: 0.0,
        m_planet: 0.001,
        m_star: 0.0,
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonPositive { name: "m_star", .. })
    ));
}

#[test]
fn non_finite_parameter_is_rejected() {
    let cfg = PlanetForceConfig {
        inc: 0.0,
        a_planet: f64::NAN,
        a_star: 0.001,
        n: 1.0,
        m0: 0.0,
        m_planet: 0.001,
        m_star: 1.0,
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NonFinite("a_planet"))
    ));
}

#[test]
fn scenario_builds_from_yaml() {
    let cfg: ScenarioConfig = serde_yaml::from_str(scenario_yaml()).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.swarm.particles.len(), 1);
    assert_eq!(scenario.swarm.t, 0.0);
    assert_eq!(scenario.planet_force.a_planet, 1.0);
    assert_eq!(scenario.planet_force.G, 1.0);
    assert!(scenario.engine.engulf_radius.is_none());
}

#[test]
fn scenario_without_particles_is_rejected() {
    let yaml = scenario_yaml().replace(
        "particles:
  - x: [ 2.0, 0.0, 0.0 ]
    v: [ 0.0, 0.7, 0.0 ]",
        "particles: []",
    );
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::NoParticles)
    ));
}

#[test]
fn malformed_particle_vector_is_rejected() {
    let yaml = scenario_yaml().replace("x: [ 2.0, 0.0, 0.0 ]", "x: [ 2.0, 0.0 ]");
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(ConfigError::BadVector { index: 0, field: "x", len: 2 })
    ));
}

// ==================================================================================
// Integrator and driver tests
// ==================================================================================

#[test]
fn verlet_advances_time_and_moves_particle() {
    let mut swarm = one_particle_swarm([2.0, 0.0, 0.0]);
    let params = test_params();
    let forces = AccelSet::new().with(test_force());

    let x0 = swarm.particles[0].x;
    for _ in 0..10 {
        tpsim::verlet_integrator(&mut swarm, &forces, &params);
    }

    assert_abs_diff_eq!(swarm.t, 10.0 * params.h0, epsilon = 1e-12);
    assert!((swarm.particles[0].x - x0).norm() > 0.0);
}

#[test]
fn leapfrog_matches_verlet_over_short_horizon() {
    let params = test_params();

    let mut sv = one_particle_swarm([2.0, 0.0, 0.0]);
    let mut sl = sv.clone();
    let forces = AccelSet::new().with(test_force());

    for _ in 0..200 {
        tpsim::verlet_integrator(&mut sv, &forces, &params);
        tpsim::leapfrog_integrator(&mut sl, &forces, &params);
    }

    let dx = (sv.particles[0].x - sl.particles[0].x).norm();
    assert!(dx < 1e-5, "integrators diverged: {}", dx);
}

#[test]
fn run_stops_at_end_time() {
    let cfg: ScenarioConfig = serde_yaml::from_str(scenario_yaml()).unwrap();
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    let reason = tpsim::run(&mut scenario);

    assert_eq!(reason, StopReason::TimeReached);
    assert!(scenario.swarm.t >= scenario.parameters.t_end);
}

#[test]
fn engulfment_stops_the_run() {
    // generous stop radius: the particle starts inside it
    let yaml = scenario_yaml().replace(
        "integrator: \"verlet\"",
        "integrator: \"verlet\"
  engulf_radius: 5.0",
    );
    let cfg: ScenarioConfig = serde_yaml::from_str(&yaml).unwrap();
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    let reason = tpsim::run(&mut scenario);
    assert!(matches!(reason, StopReason::Engulfed { .. }));
}
