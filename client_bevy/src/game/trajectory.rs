use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::{to_render, SimHandle, UpdateSet};

pub struct TrajectoryPlugin;

impl Plugin for TrajectoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_preview.in_set(UpdateSet::Visuals));
    }
}

/// Draw the predicted arc while the ball is grounded. The preview buffer is
/// empty in flight, so the line disappears on launch by itself.
fn draw_preview(sim: Res<SimHandle>, mut gizmos: Gizmos) {
    let points = sim.0.preview();
    if points.is_empty() {
        return;
    }

    let start = to_render(sim.0.ball().pos);
    gizmos.linestrip(
        std::iter::once(start).chain(points.iter().map(|p| to_render(*p))),
        color_from_hex(Colors::TRAJECTORY),
    );
}
