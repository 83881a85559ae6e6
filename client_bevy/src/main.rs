mod constants;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use game::{BallPlugin, CorePlugin, CourtPlugin, HoopsPlugin, HudPlugin, InputPlugin, TrajectoryPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hoopshot".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(CourtPlugin)
        .add_plugins(HoopsPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(TrajectoryPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(HudPlugin)
        .run();
}
