use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::SimHandle;

const LINE_WIDTH: f32 = 0.1;
const LINE_LIFT: f32 = 0.005;
const FLOOR_THICKNESS: f32 = 0.2;
const CENTER_CIRCLE_RADIUS: f32 = 1.8;

pub struct CourtPlugin;

impl Plugin for CourtPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_court);
    }
}

fn spawn_court(
    mut commands: Commands,
    sim: Res<SimHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let court = sim.0.court();
    let width = court.width as f32;
    let depth = court.depth as f32;
    let surface_y = court.surface_y as f32;
    let line_y = surface_y + LINE_LIFT;

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, FLOOR_THICKNESS, depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::COURT),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, surface_y - FLOOR_THICKNESS / 2.0, 0.0),
    ));

    let line_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::COURT_LINE),
        unlit: true,
        ..default()
    });
    let long_line = meshes.add(Cuboid::new(width, 0.01, LINE_WIDTH));
    let short_line = meshes.add(Cuboid::new(LINE_WIDTH, 0.01, depth));

    // Boundary rectangle plus the midcourt line
    for z in [-depth / 2.0 + LINE_WIDTH / 2.0, depth / 2.0 - LINE_WIDTH / 2.0] {
        commands.spawn((
            Mesh3d(long_line.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_xyz(0.0, line_y, z),
        ));
    }
    for x in [
        -width / 2.0 + LINE_WIDTH / 2.0,
        0.0,
        width / 2.0 - LINE_WIDTH / 2.0,
    ] {
        commands.spawn((
            Mesh3d(short_line.clone()),
            MeshMaterial3d(line_material.clone()),
            Transform::from_xyz(x, line_y, 0.0),
        ));
    }

    // Flattened torus reads as a painted circle from above
    commands.spawn((
        Mesh3d(meshes.add(Torus {
            minor_radius: LINE_WIDTH / 2.0,
            major_radius: CENTER_CIRCLE_RADIUS,
        })),
        MeshMaterial3d(line_material),
        Transform::from_xyz(0.0, line_y, 0.0).with_scale(Vec3::new(1.0, 0.1, 1.0)),
    ));
}
