//! Force / acceleration contributors for the orbital engine
//!
//! Defines the 2D acceleration trait and the central-mass Newtonian
//! gravity term: every orbiting body is pulled toward the anchor only,
//! never toward the other bodies

use crate::simulation::states::{Body, System, NVec2};

/// Collection of 2D acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per orbiting body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all orbiting bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - the anchor has no slot in `out`; it is never accelerated
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body,
/// indexed like `sys.bodies`
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity toward the central anchor
///
/// There is no softening: a body sitting exactly on the anchor gets zero
/// acceleration instead of a divide-by-zero
pub struct CentralGravity {
    pub G: f64, // gravitational constant
}

impl CentralGravity {
    /// Acceleration on `body` from the anchor's pull.
    ///
    /// Returns a zero vector when the separation is exactly zero; the
    /// force law is undefined there.
    pub fn accel_toward_anchor(&self, body: &Body, anchor: &Body) -> NVec2 {
        // d points from the body toward the anchor
        let d = anchor.x - body.x;
        let r = d.norm();
        if r == 0.0 {
            return NVec2::zeros();
        }

        // F = G m M / r^2, then a = F / m
        // (the body mass cancels; the force is kept as an intermediate)
        let f = self.G * body.m * anchor.m / (r * r);
        let a = f / body.m;

        // decompose along the unit vector d / r
        d * (a / r)
    }
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        for (i, body) in sys.bodies.iter().enumerate() {
            out[i] += self.accel_toward_anchor(body, &sys.anchor);
        }
    }
}
