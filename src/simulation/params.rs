//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - output cadence,
//! - gravitational constant `G`

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub out_dt: f64, // interval between output samples
    pub G: f64, // gravitational constant
}
