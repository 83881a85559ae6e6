use bevy::prelude::*;

use hoopshot_sim::input::MovementInput;

use super::{MovementState, SimHandle, UpdateSet};

/// Power step per W/S press, in percent.
const POWER_STEP: i32 = 5;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut movement: ResMut<MovementState>,
    mut sim: ResMut<SimHandle>,
) {
    movement.0 = MovementInput {
        forward: keys.pressed(KeyCode::ArrowUp),
        backward: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
    };

    if keys.just_pressed(KeyCode::Space) {
        sim.0.fire();
    }
    if keys.just_pressed(KeyCode::KeyW) {
        sim.0.adjust_power(POWER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyS) {
        sim.0.adjust_power(-POWER_STEP);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        sim.0.reset();
    }
}
