use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::engine::Simulation;
use crate::simulation::states::BodyId;

/// Finished simulation plus the current playback frame.
#[derive(Resource)]
struct Playback {
    sim: Simulation,
    frame: usize,
}

#[derive(Component)]
struct BodyIndex(pub usize);

const SCALE: f32 = 50.0;
const BODY_RADIUS: f32 = 6.0;
const SUN_RADIUS: f32 = 20.0;

// Per-body colors cycle through this palette, so body identity is stable
// across frames
const PALETTE: [Color; 5] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::CYAN,
    Color::FUCHSIA,
];

fn body_color(i: usize) -> Color {
    PALETTE[i % PALETTE.len()]
}

/// Replay a finished simulation's recorded trajectories in a Bevy 2D viewer.
///
/// Consumes only the trajectory accessor, the body ordering, and the step
/// count; playback clamps at the last recorded frame.
pub fn run_replay(sim: Simulation) {
    println!(
        "run_replay: starting Bevy 2D viewer, {} bodies, {} recorded steps",
        sim.bodies().len(),
        sim.completed_steps()
    );

    App::new()
        .insert_resource(Playback { sim, frame: 0 })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, (advance_playback_system, draw_trails_system))
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    playback: Res<Playback>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The sun, drawn once at its fixed position
    let sun = playback.sim.sun();
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(SUN_RADIUS))),
        material: materials.add(ColorMaterial::from(Color::YELLOW)),
        transform: Transform::from_xyz(
            sun.position.x as f32 * SCALE,
            sun.position.y as f32 * SCALE,
            0.0,
        ),
        ..Default::default()
    });

    // One dot per body, colored by body index
    for (i, body) in playback.sim.bodies().iter().enumerate() {
        let x = body.position.x as f32 * SCALE;
        let y = body.position.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS))),
                material: materials.add(ColorMaterial::from(body_color(i))),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_playback_system(
    mut playback: ResMut<Playback>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    // Split &mut Playback into &mut fields in one destructuring step
    let Playback { sim, frame } = &mut *playback;

    let recorded = sim.completed_steps();
    if recorded == 0 {
        return;
    }

    for (BodyIndex(i), mut transform) in &mut query {
        if let Ok(track) = sim.trajectory(BodyId(*i)) {
            let p = track[*frame];
            transform.translation.x = (p.x as f32) * SCALE;
            transform.translation.y = (p.y as f32) * SCALE;
        }
    }

    // Hold on the last recorded frame
    *frame = (*frame + 1).min(recorded - 1);
}

fn draw_trails_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    for id in playback.sim.body_ids() {
        if let Ok(track) = playback.sim.trajectory(id) {
            let end = (playback.frame + 1).min(track.len());
            let points = track[..end]
                .iter()
                .map(|p| Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE));
            gizmos.linestrip_2d(points, body_color(id.0));
        }
    }
}
