//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - view settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the anchor and bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{ScenarioConfig, BodyConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2};
use crate::simulation::forces::{AccelSet, CentralGravity};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the view settings, numerical parameters, current system
/// state, and the set of active force laws (accelerations)
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration and visualization
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            G: p_cfg.G,
            trail_limit: p_cfg.trail_limit,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        // The trail is seeded from the initial velocity, so the step size
        // has to be known here.
        let dt = parameters.h0;
        let anchor = build_body(&cfg.anchor, dt);
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc| build_body(bc, dt)).collect();

        // Initial system state: bodies at t = 0
        let system = System {
            anchor,
            bodies,
            t: 0.0,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            scale: e_cfg.scale,
            zoom: e_cfg.zoom,
            zoom_step: e_cfg.zoom_step.unwrap_or(0.1),
            min_view_scale: e_cfg.min_view_scale,
            window: e_cfg.window.unwrap_or(600.0),
        };

        // Forces: construct an AccelSet and register central gravity
        let mut forces = AccelSet::new();
        forces = forces.with(CentralGravity {
            G: parameters.G,
        });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }
}

fn build_body(bc: &BodyConfig, dt: f64) -> Body {
    Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
        bc.radius,
        bc.display_scale.unwrap_or(1.0),
        bc.color,
        dt,
    )
}
