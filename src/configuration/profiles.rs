//! Built-in scenario profiles.
//!
//! The two observed variants of the solar system are both available:
//!
//! - `classic`: eight planets including Saturn, per-planet display scaling
//!   on the outer planets, and mouse-wheel zoom
//! - `fixed`: seven planets excluding Saturn, no display scaling, fixed view
//!
//! Each profile is a data table of initial conditions consumed by one
//! construction routine; neither variant is treated as the canonical one.

use clap::ValueEnum;

use crate::configuration::config::{
    ScenarioConfig, EngineConfig, ParametersConfig, BodyConfig, BodyColor,
};

/// Which built-in planet set to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Eight planets, per-planet display scaling, wheel zoom
    Classic,
    /// Seven planets (no Saturn), fixed view
    Fixed,
}

/// Gravitational constant, m^3 kg^-1 s^-2
const G: f64 = 6.67e-11;

/// Simulated seconds per frame. Large on purpose: one visual frame should
/// advance an orbit meaningfully at astronomical distances.
const DT: f64 = 146_000.0;

/// Metres per screen pixel in the zoomable profile
const CLASSIC_SCALE: f64 = 1.9e9;

/// Metres per screen pixel in the fixed-view profile
const FIXED_SCALE: f64 = 2.4e9;

/// Square window side, pixels
const WINDOW: f64 = 600.0;

/// Anchor mass (the Sun), kg
const SUN_MASS: f64 = 1.989e30;

/// One planet's initial conditions: distance from the anchor along +x,
/// orbital speed (applied along -y), draw radius, mass, color, and the
/// display shrink factor used by the zoomable profile.
struct PlanetRow {
    name: &'static str,
    distance: f64, // semi-major axis, metres
    speed: f64,    // orbital velocity, m/s
    radius: f64,   // draw radius, pixels
    m: f64,        // mass, kg
    color: BodyColor,
    display_scale: Option<f64>,
}

const PLANETS: [PlanetRow; 8] = [
    PlanetRow { name: "mercury", distance: 57.91e9, speed: 47.87e3, radius: 2.0, m: 3.301e23, color: BodyColor::Gray, display_scale: None },
    PlanetRow { name: "venus", distance: 108.2e9, speed: 35.02e3, radius: 5.0, m: 4.867e24, color: BodyColor::Orange, display_scale: None },
    PlanetRow { name: "earth", distance: 149.6e9, speed: 29.78e3, radius: 5.0, m: 5.972e24, color: BodyColor::Blue, display_scale: None },
    PlanetRow { name: "mars", distance: 227.9e9, speed: 24.077e3, radius: 4.0, m: 6.417e23, color: BodyColor::Red, display_scale: None },
    PlanetRow { name: "jupiter", distance: 778.5e9, speed: 13.07e3, radius: 20.0, m: 1.898e27, color: BodyColor::Brown, display_scale: Some(0.37) },
    PlanetRow { name: "saturn", distance: 1.434e12, speed: 9.69e3, radius: 14.0, m: 5.683e26, color: BodyColor::Yellow, display_scale: Some(0.23) },
    PlanetRow { name: "uranus", distance: 2.871e12, speed: 6.81e3, radius: 12.0, m: 8.681e25, color: BodyColor::Cyan, display_scale: Some(0.15) },
    PlanetRow { name: "neptune", distance: 4.495e12, speed: 5.43e3, radius: 12.0, m: 1.024e26, color: BodyColor::Blue, display_scale: Some(0.12) },
];

/// Build the `ScenarioConfig` for a built-in profile from the planet table
pub fn builtin_scenario(profile: Profile) -> ScenarioConfig {
    let zoomed = matches!(profile, Profile::Classic);

    let bodies: Vec<BodyConfig> = PLANETS
        .iter()
        .filter(|row| zoomed || row.name != "saturn")
        .map(|row| BodyConfig {
            x: vec![row.distance, 0.0],
            v: vec![0.0, -row.speed],
            m: row.m,
            radius: row.radius,
            color: row.color,
            display_scale: if zoomed { row.display_scale } else { None },
        })
        .collect();

    ScenarioConfig {
        engine: EngineConfig {
            scale: if zoomed { CLASSIC_SCALE } else { FIXED_SCALE },
            zoom: zoomed,
            zoom_step: None,
            min_view_scale: None,
            window: Some(WINDOW),
        },
        parameters: ParametersConfig {
            h0: DT,
            G,
            trail_limit: None,
        },
        anchor: BodyConfig {
            x: vec![0.0, 0.0],
            v: vec![0.0, 0.0],
            m: SUN_MASS,
            radius: 15.0,
            color: BodyColor::Yellow,
            display_scale: None,
        },
        bodies,
    }
}
