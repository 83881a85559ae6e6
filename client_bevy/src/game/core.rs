use bevy::prelude::*;

use hoopshot_shared::config::{CourtConfig, PhysicsConfig};
use hoopshot_sim::input::MovementInput;
use hoopshot_sim::scoring::ShotOutcome;
use hoopshot_sim::state::Simulation;

use crate::constants::{color_from_hex, Colors};

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Simulate,
    Visuals,
}

/// The whole game state lives here; every render system reads through it.
#[derive(Resource)]
pub(crate) struct SimHandle(pub Simulation);

/// Movement flags sampled from the keyboard each frame.
#[derive(Resource, Default)]
pub(crate) struct MovementState(pub MovementInput);

/// Fired by the simulate step whenever a shot resolves.
#[derive(Message)]
pub(crate) struct ShotResolved(pub ShotOutcome);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let physics = PhysicsConfig::default();
        let court = CourtConfig::default();
        if let Err(reason) = physics.validate().and_then(|_| court.validate()) {
            error!("invalid configuration: {reason}");
            std::process::exit(1);
        }

        app.insert_resource(SimHandle(Simulation::new(physics, court)))
            .init_resource::<MovementState>()
            .add_message::<ShotResolved>()
            .insert_resource(ClearColor(color_from_hex(Colors::SKY)))
            .configure_sets(
                Update,
                (UpdateSet::Input, UpdateSet::Simulate, UpdateSet::Visuals).chain(),
            )
            .add_systems(Startup, setup_scene)
            .add_systems(Update, simulate.in_set(UpdateSet::Simulate));
    }
}

fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Msaa::Sample4,
        Transform::from_xyz(0.0, 12.0, 18.0).looking_at(Vec3::new(0.0, 2.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}

fn simulate(
    time: Res<Time>,
    movement: Res<MovementState>,
    mut sim: ResMut<SimHandle>,
    mut resolved: MessageWriter<ShotResolved>,
) {
    if let Some(outcome) = sim.0.tick(time.delta_secs_f64(), &movement.0) {
        resolved.write(ShotResolved(outcome));
    }
}
