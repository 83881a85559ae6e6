mod ball;
mod core;
mod court;
mod hoops;
mod hud;
mod input;
mod trajectory;

pub use ball::BallPlugin;
pub use core::CorePlugin;
pub(crate) use core::{MovementState, ShotResolved, SimHandle, UpdateSet};
pub use court::CourtPlugin;
pub use hoops::HoopsPlugin;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use trajectory::TrajectoryPlugin;

use bevy::prelude::Vec3 as BevyVec3;
use hoopshot_shared::vec3::Vec3;

/// Simulation space is f64, render space is f32.
pub(crate) fn to_render(v: Vec3) -> BevyVec3 {
    BevyVec3::new(v.x as f32, v.y as f32, v.z as f32)
}
