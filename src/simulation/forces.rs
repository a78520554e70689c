//! Force / acceleration contributors for the test-particle engine
//!
//! Defines the acceleration trait, the set that sums contributions, and
//! the planet+star gravity term with analytically prescribed body positions

use crate::simulation::orbit::{mean_anomaly, planet_position, point_mass_accel, star_position};
use crate::simulation::states::{NVec3, Swarm};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all particles in `swarm`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, swarm: &Swarm, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, swarm, out);
        }
    }
}

/// Trait for acceleration sources operating on a [`Swarm`]
/// Implementations add their contribution into `out` for the particles
/// they act on; the buffer is owned and zeroed by the caller
pub trait Acceleration {
    fn acceleration(&self, t: f64, swarm: &Swarm, out: &mut [NVec3]);
}

/// Gravity from a planet on a prescribed circular orbit and the star
/// implied by momentum balance
///
/// Neither body is integrated: the planet position is a closed-form
/// function of time, and the star is its center-of-mass reflection.
/// The contribution is accumulated onto particle index 0 only.
///
/// `inc` and `a_star` are accepted by the configuration but not consumed
/// by the coplanar model.
#[derive(Debug, Clone)]
pub struct PlanetStarGravity {
    pub G: f64, // gravitational constant
    pub inc: f64, // planet inclination
    pub a_planet: f64, // planet semi-major axis
    pub a_star: f64, // star semi-major axis
    pub n: f64, // planet mean motion
    pub m0: f64, // initial planet mean anomaly
    pub m_planet: f64, // planet mass
    pub m_star: f64, // star mass
}

impl PlanetStarGravity {
    /// Planet position at time `t`
    pub fn planet_position_at(&self, t: f64) -> NVec3 {
        let phase = mean_anomaly(self.n, self.m0, t);
        planet_position(self.a_planet, phase)
    }

    /// Star position at time `t`
    pub fn star_position_at(&self, t: f64) -> NVec3 {
        let planet = self.planet_position_at(t);
        star_position(&planet, self.m_planet, self.m_star)
    }

    /// Distance of particle 0 to the star at time `t`
    /// Used by the engulfment stop check
    pub fn star_separation(&self, t: f64, swarm: &Swarm) -> f64 {
        let star = self.star_position_at(t);
        (swarm.particles[0].x - star).norm()
    }
}

impl Acceleration for PlanetStarGravity {
    fn acceleration(&self, t: f64, swarm: &Swarm, out: &mut [NVec3]) {
        if swarm.particles.is_empty() { // no particles, return
            return;
        }

        // Body positions at time t
        let planet = self.planet_position_at(t);
        let star = self.star_position_at(t);

        // Only the first particle feels this force
        let p = swarm.particles[0].x;

        // Two independent inverse-square contributions. A particle sitting
        // exactly on either body divides by zero and the non-finite result
        // propagates into the accumulator unmasked.
        let a_planet = point_mass_accel(self.G * self.m_planet, &planet, &p);
        let a_star = point_mass_accel(self.G * self.m_star, &star, &p);

        out[0] += a_planet + a_star;
    }
}
