//! Fixed-step time integrator for the orbital system
//!
//! Provides a position-Verlet (Störmer-Verlet) step driven by `AccelSet`
//! and `Parameters`. Velocity is never stored: each body's previous
//! position lives at the end of its trail, and the new position is
//!
//! ```text
//! x_n+1 = 2 x_n - x_n-1 + a_n dt^2
//! ```

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance every orbiting body by one fixed step of position-Verlet
/// Uses one force evaluation per step and updates positions, trails,
/// and `sys.t` in-place based on `params.h0`. The anchor is untouched.
pub fn verlet_step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt
    let dt2 = dt * dt; // dt^2, position-update factor

    // Allocate a vector of accelerations, one per orbiting body
    // accels[i] holds a_n for body i at the current time t = sys.t
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        // x_n-1 is the last trail entry before this step
        let prev = b.prev();

        // x_n+1 = 2 x_n - x_n-1 + a_n dt^2
        let next = 2.0 * b.x - prev + *a * dt2;

        // The pre-update position becomes the newest trail entry, then the
        // body moves. The order matters: the next step reads this entry
        // as its x_n-1.
        b.trail.push(b.x);
        if let Some(limit) = params.trail_limit {
            if b.trail.len() > limit {
                b.trail.remove(0);
            }
        }
        b.x = next;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
