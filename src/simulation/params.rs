//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the fixed integration step size `h0`,
//! - the gravitational constant `G`,
//! - an optional cap on retained trail points

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size, seconds
    pub G: f64, // gravitational constant
    pub trail_limit: Option<usize>, // max retained trail points, None = unbounded
}
