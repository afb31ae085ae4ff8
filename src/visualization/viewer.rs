use bevy::prelude::*;
use bevy::input::mouse::MouseWheel;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::BodyColor;
use crate::simulation::scenario::Scenario;
use crate::simulation::integrator::verlet_step;
use crate::simulation::states::NVec2;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the anchor's circle
#[derive(Component)]
struct AnchorDot;

/// Global view multiplier adjusted by the mouse wheel
#[derive(Resource)]
struct ViewScale(pub f64);

/// Physics steps per second of wall time
const FRAME_HZ: f64 = 60.0;

/// Half-pixel gizmo circle, visually a single-pixel mark
const TRAIL_MARK_RADIUS: f32 = 0.5;

/// Map a simulation-space position (metres, origin at the anchor) to screen
/// coordinates (pixels, origin at the window centre, where the 2D camera sits)
pub fn to_screen(p: NVec2, view_scale: f64, scale: f64) -> Vec2 {
    Vec2::new(
        (p.x * view_scale / scale) as f32,
        (p.y * view_scale / scale) as f32,
    )
}

/// Apply one wheel event to the view multiplier. `up` zooms in.
///
/// The multiplier is unclamped unless a floor is configured, so repeated
/// zoom-out can reach zero or negative values.
pub fn apply_zoom(view: f64, up: bool, step: f64, min: Option<f64>) -> f64 {
    let next = if up { view + step } else { view - step };
    match min {
        Some(floor) => next.max(floor),
        None => next,
    }
}

pub fn run_viewer(scenario: Scenario) {
    println!("run_viewer: starting Bevy viewer with {} bodies", scenario.system.bodies.len());

    let side = scenario.engine.window as f32;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ViewScale(1.0))
        .insert_resource(Time::<Fixed>::from_hz(FRAME_HZ))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planets".to_string(),
                resolution: (side, side).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (zoom_input_system, sync_transforms_system, draw_trails_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera over a black canvas
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    let scale = scenario.engine.scale;

    // Anchor first, at z = 0 beneath the orbiting bodies
    let anchor = &scenario.system.anchor;
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(anchor.radius as f32))),
            material: materials.add(ColorMaterial::from(body_color(anchor.color))),
            transform: Transform::from_translation(to_screen(anchor.x, 1.0, scale).extend(0.0)),
            ..Default::default()
        },
        AnchorDot,
    ));

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        // The display shrink factor is baked into the mesh radius;
        // the zoom multiplier is applied through the transform scale
        let radius_screen = (body.radius * body.display_scale) as f32;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_translation(to_screen(body.x, 1.0, scale).extend(1.0)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    verlet_step(system, forces, parameters);
}

fn zoom_input_system(
    scenario: Res<Scenario>,
    mut view: ResMut<ViewScale>,
    mut scroll_evr: EventReader<MouseWheel>,
) {
    if !scenario.engine.zoom {
        return;
    }
    for ev in scroll_evr.read() {
        view.0 = apply_zoom(
            view.0,
            ev.y > 0.0,
            scenario.engine.zoom_step,
            scenario.engine.min_view_scale,
        );
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    view: Res<ViewScale>,
    mut bodies: Query<(&BodyIndex, &mut Transform), Without<AnchorDot>>,
    mut anchor: Query<&mut Transform, With<AnchorDot>>,
) {
    let scale = scenario.engine.scale;
    let v = view.0;

    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let p = to_screen(b.x, v, scale);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
            transform.scale = Vec3::splat(v as f32);
        }
    }

    // The anchor is never integrated; it still follows the view multiplier
    for mut transform in &mut anchor {
        let p = to_screen(scenario.system.anchor.x, v, scale);
        transform.translation.x = p.x;
        transform.translation.y = p.y;
        transform.scale = Vec3::splat(v as f32);
    }
}

/// One gizmo mark per retained trail point, every frame.
/// Cost is O(trail length) per body; with an unbounded trail this grows
/// for the lifetime of the process.
fn draw_trails_system(scenario: Res<Scenario>, view: Res<ViewScale>, mut gizmos: Gizmos) {
    let scale = scenario.engine.scale;
    for body in &scenario.system.bodies {
        let color = body_color(body.color);
        for p in &body.trail {
            gizmos.circle_2d(to_screen(*p, view.0, scale), TRAIL_MARK_RADIUS, color);
        }
    }
}

fn body_color(color: BodyColor) -> Color {
    match color {
        BodyColor::Yellow => Color::srgb(1.0, 1.0, 0.0),
        BodyColor::Gray => Color::srgb(0.5, 0.5, 0.5),
        BodyColor::Orange => Color::srgb(1.0, 0.65, 0.0),
        BodyColor::Blue => Color::srgb(0.0, 0.0, 1.0),
        BodyColor::Red => Color::srgb(1.0, 0.0, 0.0),
        BodyColor::Brown => Color::srgb(0.65, 0.16, 0.16),
        BodyColor::Cyan => Color::srgb(0.0, 1.0, 1.0),
        BodyColor::White => Color::srgb(1.0, 1.0, 1.0),
    }
}
