use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::{to_render, SimHandle, UpdateSet};

pub struct BallPlugin;

#[derive(Component)]
struct BallVisual;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ball)
            .add_systems(Update, sync_ball.in_set(UpdateSet::Visuals));
    }
}

fn spawn_ball(
    mut commands: Commands,
    sim: Res<SimHandle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ball = sim.0.ball();
    let radius = ball.radius as f32;

    let seam_mesh = meshes.add(Torus {
        minor_radius: 0.012,
        major_radius: radius,
    });
    let seam_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::BALL_SEAM),
        ..default()
    });

    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color_from_hex(Colors::BALL),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(to_render(ball.pos)),
            BallVisual,
        ))
        .with_children(|parent| {
            // Two perpendicular seam rings
            parent.spawn((
                Mesh3d(seam_mesh.clone()),
                MeshMaterial3d(seam_material.clone()),
                Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            ));
            parent.spawn((
                Mesh3d(seam_mesh),
                MeshMaterial3d(seam_material),
                Transform::from_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            ));
        });
}

fn sync_ball(sim: Res<SimHandle>, mut q_ball: Query<&mut Transform, With<BallVisual>>) {
    let ball = sim.0.ball();
    for mut transform in &mut q_ball {
        transform.translation = to_render(ball.pos);
        transform.rotation =
            Quat::from_euler(EulerRot::XYZ, ball.roll_x as f32, 0.0, ball.roll_z as f32);
    }
}
