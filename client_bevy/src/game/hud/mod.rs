mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use super::UpdateSet;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<types::MessageState>()
            .add_systems(Startup, spawn::spawn_hud)
            .add_systems(
                Update,
                (
                    systems::update_stats_ui,
                    systems::update_power_ui,
                    systems::update_message_ui,
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
