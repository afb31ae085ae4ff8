//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – view options (coordinate scale, wheel zoom, window)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for the anchor and each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   scale: 1.9e+9           # metres per screen pixel
//!   zoom: true              # mouse wheel adjusts the view multiplier
//!   zoom_step: 0.1          # multiplier change per wheel event
//!   min_view_scale: 0.1     # optional clamp floor; omit for unclamped
//!   window: 600.0           # square window side, pixels
//!
//! parameters:
//!   h0: 146000.0            # fixed step size, seconds per frame
//!   G: 6.67e-11             # gravitational constant
//!   trail_limit: 5000       # optional; omit for an unbounded trail
//!
//! anchor:
//!   x: [ 0.0, 0.0 ]
//!   v: [ 0.0, 0.0 ]
//!   m: 1.989e+30
//!   radius: 15.0
//!   color: yellow
//!
//! bodies:
//!   - x: [ 1.496e+11, 0.0 ]
//!     v: [ 0.0, -29.78e+3 ]
//!     m: 5.972e+24
//!     radius: 5.0
//!     color: blue
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, which may use different structs optimized for simulation.

use serde::Deserialize;

/// Symbolic draw color for a body
/// Written lowercase in YAML, e.g. `color: cyan`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyColor {
    Yellow,
    Gray,
    Orange,
    Blue,
    Red,
    Brown,
    Cyan,
    White,
}

/// High-level view configuration
/// Controls how simulation space maps onto the window
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub scale: f64, // metres per screen pixel
    pub zoom: bool, // `true` - mouse wheel adjusts the view multiplier
    pub zoom_step: Option<f64>, // multiplier change per wheel event, default 0.1
    pub min_view_scale: Option<f64>, // clamp floor for the multiplier; omit for unclamped
    pub window: Option<f64>, // square window side in pixels, default 600
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,  // fixed step size in simulated seconds per frame
    pub G: f64,   // gravitational constant
    pub trail_limit: Option<usize>, // max retained trail points; omit for unbounded
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in metres
    pub v: Vec<f64>, // Initial velocity vector `v` in metres per second
    pub m: f64,      // Mass of the body in kilograms
    pub radius: f64, // Draw radius of the body in pixels
    pub color: BodyColor, // Symbolic draw color
    pub display_scale: Option<f64>, // Per-body draw shrink factor, default 1.0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // View-level configuration (scale, zoom, window)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub anchor: BodyConfig, // The central mass the bodies orbit
    pub bodies: Vec<BodyConfig>, // List of orbiting bodies
}
