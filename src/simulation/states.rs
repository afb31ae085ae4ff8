//! Core state types for the orbital simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` holds one object's position, mass, draw attributes, and trail
//! - `System` holds the central anchor, the orbiting bodies, and the time `t`
//!
//! Velocity only exists at construction time: it is folded into a synthetic
//! first trail entry, and the integrator recovers it from the spacing of
//! consecutive trail points (position-Verlet).

use nalgebra::Vector2;

use crate::configuration::config::BodyColor;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, metres
    pub m: f64, // mass, kg
    pub radius: f64, // draw radius, pixels
    pub display_scale: f64, // per-body draw shrink factor, 1.0 when unused
    pub color: BodyColor, // draw color
    pub trail: Vec<NVec2>, // past positions, oldest first; never empty
}

impl Body {
    /// Construct a body at `x` with initial velocity `v`.
    ///
    /// The velocity is not stored: it becomes a synthetic previous position
    /// `x - v * dt`, so the first Verlet step sees the right spacing.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, display_scale: f64, color: BodyColor, dt: f64) -> Self {
        Self {
            x,
            m,
            radius,
            display_scale,
            color,
            trail: vec![x - v * dt],
        }
    }

    /// The most recent trail entry, i.e. the position before the current one.
    pub fn prev(&self) -> NVec2 {
        // the trail is seeded at construction and eviction never drains it
        // below one entry
        self.trail.last().copied().unwrap_or(self.x)
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub anchor: Body, // central mass, never integrated
    pub bodies: Vec<Body>, // orbiting bodies
    pub t: f64, // time, seconds
}
