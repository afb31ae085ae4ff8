use planetsim::simulation::states::{Body, System, NVec2};
use planetsim::simulation::params::Parameters;
use planetsim::simulation::forces::{AccelSet, CentralGravity};
use planetsim::simulation::integrator::verlet_step;
use planetsim::simulation::scenario::Scenario;
use planetsim::configuration::config::{BodyColor, ScenarioConfig};
use planetsim::configuration::profiles::{builtin_scenario, Profile};
use planetsim::visualization::viewer::{apply_zoom, to_screen};

use approx::assert_relative_eq;

const G: f64 = 6.67e-11;
const DT: f64 = 146_000.0;
const SUN_MASS: f64 = 1.989e30;

/// Sun-like anchor at the origin
pub fn test_anchor() -> Body {
    Body::new(NVec2::zeros(), NVec2::zeros(), SUN_MASS, 15.0, 1.0, BodyColor::Yellow, DT)
}

/// Earth-like body on the +x axis with its tangential velocity
pub fn earth_body() -> Body {
    Body::new(
        NVec2::new(1.496e11, 0.0),
        NVec2::new(0.0, -29.78e3),
        5.972e24,
        5.0,
        1.0,
        BodyColor::Blue,
        DT,
    )
}

/// Stationary unit-mass body at `dist` along the +x axis
pub fn body_at(dist: f64) -> Body {
    Body::new(NVec2::new(dist, 0.0), NVec2::zeros(), 1.0, 5.0, 1.0, BodyColor::Gray, DT)
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        h0: DT,
        G,
        trail_limit: None,
    }
}

/// Build a system of the anchor plus the given bodies at t = 0
pub fn sun_system(bodies: Vec<Body>) -> System {
    System {
        anchor: test_anchor(),
        bodies,
        t: 0.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(CentralGravity { G: p.G })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_zero_at_coincident_positions() {
    // A body sitting exactly on the anchor must get zero acceleration,
    // never a division error
    let body = Body::new(NVec2::zeros(), NVec2::zeros(), 5.972e24, 5.0, 1.0, BodyColor::Blue, DT);
    let sys = sun_system(vec![body]);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![NVec2::zeros(); 1];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    assert_eq!(acc[0], NVec2::zeros());
}

#[test]
fn gravity_magnitude_matches_inverse_square_law() {
    let r = 1.496e11;
    let sys = sun_system(vec![earth_body()]);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![NVec2::zeros(); 1];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // Body on the +x axis, so the pull is (-G M / r^2, 0)
    let expected = G * SUN_MASS / (r * r);
    assert_relative_eq!(acc[0].x, -expected, max_relative = 1e-12);
    assert_eq!(acc[0].y, 0.0);
}

#[test]
fn gravity_independent_of_body_mass() {
    let x = NVec2::new(2.3e11, -1.1e11);
    let anchor = test_anchor();
    let light = Body::new(x, NVec2::zeros(), 1.0, 5.0, 1.0, BodyColor::Gray, DT);
    let heavy = Body::new(x, NVec2::zeros(), 7.7e26, 5.0, 1.0, BodyColor::Gray, DT);

    let gravity = CentralGravity { G };
    let a_light = gravity.accel_toward_anchor(&light, &anchor);
    let a_heavy = gravity.accel_toward_anchor(&heavy, &anchor);

    assert_relative_eq!(a_light.x, a_heavy.x, max_relative = 1e-12);
    assert_relative_eq!(a_light.y, a_heavy.y, max_relative = 1e-12);
}

#[test]
fn gravity_points_toward_anchor() {
    let body = Body::new(NVec2::new(1.0e11, 5.0e10), NVec2::zeros(), 1.0, 5.0, 1.0, BodyColor::Gray, DT);
    let sys = sun_system(vec![body]);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![NVec2::zeros(); 1];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let d = sys.anchor.x - sys.bodies[0].x;
    assert!(acc[0].dot(&d) > 0.0, "Acceleration is not toward the anchor");
}

#[test]
fn gravity_quarter_at_double_distance() {
    let sys_r = sun_system(vec![body_at(1.0e11)]);
    let sys_2r = sun_system(vec![body_at(2.0e11)]);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![NVec2::zeros(); 1];
    let mut acc_2r = vec![NVec2::zeros(); 1];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn trail_gains_one_entry_per_step() {
    let mut sys = sun_system(vec![earth_body()]);
    let p = test_params();
    let forces = gravity_set(&p);

    assert_eq!(sys.bodies[0].trail.len(), 1);
    for _ in 0..10 {
        verlet_step(&mut sys, &forces, &p);
    }
    assert_eq!(sys.bodies[0].trail.len(), 11);
}

#[test]
fn verlet_step_is_deterministic() {
    let p = test_params();
    let forces = gravity_set(&p);

    let mut sys_a = sun_system(vec![earth_body(), body_at(2.0e11)]);
    let mut sys_b = sys_a.clone();

    for _ in 0..3 {
        verlet_step(&mut sys_a, &forces, &p);
        verlet_step(&mut sys_b, &forces, &p);
    }

    assert_eq!(sys_a.t, sys_b.t);
    for (a, b) in sys_a.bodies.iter().zip(sys_b.bodies.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.trail, b.trail);
    }
}

#[test]
fn verlet_update_matches_closed_form() {
    let mut sys = sun_system(vec![earth_body()]);
    let p = test_params();
    let forces = gravity_set(&p);

    let x0 = sys.bodies[0].x;
    let prev = sys.bodies[0].trail[0];
    let mut acc = vec![NVec2::zeros(); 1];
    forces.accumulate_accels(sys.t, &sys, &mut acc);
    let expected = 2.0 * x0 - prev + acc[0] * (p.h0 * p.h0);

    verlet_step(&mut sys, &forces, &p);

    assert_eq!(sys.bodies[0].x, expected);
    // the pre-update position was appended before the overwrite
    assert_eq!(sys.bodies[0].trail[1], x0);
}

#[test]
fn one_step_follows_velocity_with_inward_pull() {
    // Sun at the origin, Earth at 1 au moving in -y: after one step the body
    // must have moved down and slightly inward
    let mut sys = sun_system(vec![earth_body()]);
    let p = test_params();
    let forces = gravity_set(&p);

    verlet_step(&mut sys, &forces, &p);

    let b = &sys.bodies[0];
    assert!(b.x.y < 0.0, "expected motion along the initial -y velocity");
    assert!(b.x.x < 1.496e11, "expected a small inward pull");
}

#[test]
fn anchor_position_never_integrated() {
    let mut sys = sun_system(vec![earth_body()]);
    let p = test_params();
    let forces = gravity_set(&p);

    for _ in 0..5 {
        verlet_step(&mut sys, &forces, &p);
    }

    assert_eq!(sys.anchor.x, NVec2::zeros());
    assert_eq!(sys.anchor.trail.len(), 1);
}

#[test]
fn trail_limit_caps_history() {
    let mut p = test_params();
    p.trail_limit = Some(4);
    let forces = gravity_set(&p);
    let mut sys = sun_system(vec![earth_body()]);

    for _ in 0..10 {
        verlet_step(&mut sys, &forces, &p);
    }
    assert_eq!(sys.bodies[0].trail.len(), 4);
}

#[test]
fn trail_limit_of_one_keeps_the_previous_position() {
    // Even at the tightest bound the trail must keep the one entry the
    // next Verlet step depends on
    let mut p = test_params();
    p.trail_limit = Some(1);
    let forces = gravity_set(&p);
    let mut sys = sun_system(vec![earth_body()]);

    for _ in 0..3 {
        let before = sys.bodies[0].x;
        verlet_step(&mut sys, &forces, &p);
        assert_eq!(sys.bodies[0].trail.len(), 1);
        assert_eq!(sys.bodies[0].prev(), before);
    }
}

// ==================================================================================
// View mapping tests
// ==================================================================================

#[test]
fn to_screen_scales_metres_to_pixels() {
    let p = NVec2::new(1.9e9, -3.8e9);

    let px = to_screen(p, 1.0, 1.9e9);
    assert_relative_eq!(px.x, 1.0_f32, epsilon = 1e-6_f32);
    assert_relative_eq!(px.y, -2.0_f32, epsilon = 1e-6_f32);

    let zoomed = to_screen(p, 2.0, 1.9e9);
    assert_relative_eq!(zoomed.x, 2.0_f32, epsilon = 1e-6_f32);
    assert_relative_eq!(zoomed.y, -4.0_f32, epsilon = 1e-6_f32);
}

#[test]
fn wheel_zoom_is_unclamped_by_default() {
    let mut view = 1.0;
    for _ in 0..15 {
        view = apply_zoom(view, false, 0.1, None);
    }
    // fifteen zoom-out events from 1.0 land below zero
    assert_relative_eq!(view, -0.5, epsilon = 1e-9);
}

#[test]
fn wheel_zoom_respects_configured_floor() {
    let mut view = 1.0;
    for _ in 0..15 {
        view = apply_zoom(view, false, 0.1, Some(0.1));
    }
    assert_relative_eq!(view, 0.1, epsilon = 1e-9);

    // zooming back in moves off the floor
    assert_relative_eq!(apply_zoom(0.1, true, 0.1, Some(0.1)), 0.2, epsilon = 1e-9);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn classic_profile_has_eight_planets_with_zoom() {
    let cfg = builtin_scenario(Profile::Classic);

    assert_eq!(cfg.bodies.len(), 8);
    assert!(cfg.engine.zoom);
    // Saturn is the yellow planet with a display scale
    assert!(cfg
        .bodies
        .iter()
        .any(|b| b.color == BodyColor::Yellow && b.display_scale == Some(0.23)));
    assert!(cfg.bodies.iter().all(|b| b.m > 0.0));
    assert!(cfg.bodies.iter().all(|b| b.m < cfg.anchor.m));
}

#[test]
fn fixed_profile_drops_saturn_and_zoom() {
    let cfg = builtin_scenario(Profile::Fixed);

    assert_eq!(cfg.bodies.len(), 7);
    assert!(!cfg.engine.zoom);
    assert!(cfg.bodies.iter().all(|b| b.display_scale.is_none()));
    // no Saturn: it was the only yellow planet
    assert!(!cfg.bodies.iter().any(|b| b.color == BodyColor::Yellow));
}

#[test]
fn scenario_seeds_trails_from_initial_velocity() {
    let scenario = Scenario::build_scenario(builtin_scenario(Profile::Classic));

    assert_eq!(scenario.system.bodies.len(), 8);
    for b in &scenario.system.bodies {
        assert_eq!(b.trail.len(), 1);
    }

    // earth sits at index 2 of the planet table; its seed is x - v * dt
    let earth = &scenario.system.bodies[2];
    assert_eq!(earth.trail[0], NVec2::new(1.496e11, 29.78e3 * 146_000.0));
}

#[test]
fn yaml_scenario_parses_and_builds() {
    let yaml = r#"
engine:
  scale: 1.9e+9
  zoom: true
  min_view_scale: 0.1
parameters:
  h0: 146000.0
  G: 6.67e-11
  trail_limit: 100
anchor:
  x: [0.0, 0.0]
  v: [0.0, 0.0]
  m: 1.989e+30
  radius: 15.0
  color: yellow
bodies:
  - x: [1.496e+11, 0.0]
    v: [0.0, -29.78e+3]
    m: 5.972e+24
    radius: 5.0
    color: blue
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.bodies.len(), 1);
    assert_eq!(cfg.bodies[0].color, BodyColor::Blue);

    let scenario = Scenario::build_scenario(cfg);
    assert_eq!(scenario.engine.zoom_step, 0.1); // defaults fill in
    assert_eq!(scenario.engine.window, 600.0);
    assert_eq!(scenario.engine.min_view_scale, Some(0.1));
    assert_eq!(scenario.parameters.trail_limit, Some(100));
    assert_eq!(scenario.system.bodies[0].display_scale, 1.0);
}
