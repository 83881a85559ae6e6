use bevy::prelude::*;

use hoopshot_sim::court::{
    ARM_HEIGHT, ARM_LENGTH, BACKBOARD_HEIGHT, BACKBOARD_THICKNESS, BACKBOARD_WIDTH, POLE_DEPTH,
    POLE_WIDTH,
};

use crate::constants::{color_from_hex, Colors};

use super::{to_render, SimHandle};

const NET_RINGS: usize = 4;
const NET_DEPTH: f32 = 0.5;
const NET_TAPER: f32 = 0.6;

pub struct HoopsPlugin;

impl Plugin for HoopsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hoops);
    }
}

/// Basket visuals are built from the same derived layout the collision
/// passes use, so what the player sees is what the ball hits.
fn spawn_hoops(
    mut commands: Commands,
    sim: Res<SimHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let court = *sim.0.court();
    let layout = sim.0.layout().clone();

    let pole_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::POLE),
        ..default()
    });
    let board_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::BACKBOARD).with_alpha(0.55),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.3,
        ..default()
    });
    let rim_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::RIM),
        ..default()
    });
    let net_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::NET),
        unlit: true,
        ..default()
    });

    let pole_mesh = meshes.add(Cuboid::new(
        POLE_DEPTH as f32,
        court.pole_height as f32,
        POLE_WIDTH as f32,
    ));
    let arm_mesh = meshes.add(Cuboid::new(
        ARM_LENGTH as f32,
        ARM_HEIGHT as f32,
        POLE_WIDTH as f32,
    ));
    let board_mesh = meshes.add(Cuboid::new(
        BACKBOARD_THICKNESS as f32,
        BACKBOARD_HEIGHT as f32,
        BACKBOARD_WIDTH as f32,
    ));
    let rim_mesh = meshes.add(Torus {
        minor_radius: court.rim_tube as f32,
        major_radius: court.rim_radius as f32,
    });

    for (hoop, colliders) in layout.hoops.iter().zip(layout.colliders.iter()) {
        let pole = colliders.pole;
        let pole_center = Vec3::new(
            ((pole.min.x + pole.max.x) / 2.0) as f32,
            ((pole.min.y + pole.max.y) / 2.0) as f32,
            ((pole.min.z + pole.max.z) / 2.0) as f32,
        );
        commands.spawn((
            Mesh3d(pole_mesh.clone()),
            MeshMaterial3d(pole_material.clone()),
            Transform::from_translation(pole_center),
        ));

        // The arm hangs inward from the pole top toward the backboard
        let inward = if pole_center.x > 0.0 { -1.0 } else { 1.0 };
        let arm_y = (court.surface_y + court.pole_height) as f32 - ARM_HEIGHT as f32 / 2.0;
        commands.spawn((
            Mesh3d(arm_mesh.clone()),
            MeshMaterial3d(pole_material.clone()),
            Transform::from_xyz(
                pole_center.x + inward * (ARM_LENGTH as f32 / 2.0),
                arm_y,
                0.0,
            ),
        ));

        let board = colliders.backboard;
        commands.spawn((
            Mesh3d(board_mesh.clone()),
            MeshMaterial3d(board_material.clone()),
            Transform::from_xyz(
                ((board.min.x + board.max.x) / 2.0) as f32,
                ((board.min.y + board.max.y) / 2.0) as f32,
                0.0,
            ),
        ));

        commands.spawn((
            Mesh3d(rim_mesh.clone()),
            MeshMaterial3d(rim_material.clone()),
            Transform::from_translation(to_render(hoop.center)),
        ));

        for ring in 1..=NET_RINGS {
            let t = ring as f32 / NET_RINGS as f32;
            let ring_radius = hoop.rim_radius as f32 * (1.0 - (1.0 - NET_TAPER) * t);
            commands.spawn((
                Mesh3d(meshes.add(Torus {
                    minor_radius: 0.01,
                    major_radius: ring_radius,
                })),
                MeshMaterial3d(net_material.clone()),
                Transform::from_translation(
                    to_render(hoop.center) - Vec3::new(0.0, NET_DEPTH * t, 0.0),
                ),
            ));
        }
    }
}
