use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use hoopshot_sim::scoring::ShotOutcome;

use crate::constants::{color_from_hex, Colors};
use crate::game::{ShotResolved, SimHandle};

use super::types::{
    accuracy_label, power_bar_px, power_label, score_label, shots_label, HudAccuracyText,
    HudMessageText, HudPowerBarFill, HudPowerText, HudScoreText, HudShotsText, MessageState,
};

type ScoreTextQuery<'w, 's> = Query<'w, 's, &'static mut Text, With<HudScoreText>>;
type ShotsTextQuery<'w, 's> =
    Query<'w, 's, &'static mut Text, (With<HudShotsText>, Without<HudScoreText>)>;
type AccuracyTextQuery<'w, 's> = Query<
    'w,
    's,
    &'static mut Text,
    (
        With<HudAccuracyText>,
        Without<HudScoreText>,
        Without<HudShotsText>,
    ),
>;

#[derive(SystemParam)]
pub(super) struct StatsTextQueries<'w, 's> {
    score: ScoreTextQuery<'w, 's>,
    shots: ShotsTextQuery<'w, 's>,
    accuracy: AccuracyTextQuery<'w, 's>,
}

pub(super) fn update_stats_ui(sim: Res<SimHandle>, mut texts: StatsTextQueries) {
    let board = sim.0.scoreboard();
    for mut text in &mut texts.score {
        text.0 = score_label(board.score);
    }
    for mut text in &mut texts.shots {
        text.0 = shots_label(board.attempts, board.makes);
    }
    for mut text in &mut texts.accuracy {
        text.0 = accuracy_label(board.accuracy());
    }
}

pub(super) fn update_power_ui(
    sim: Res<SimHandle>,
    mut q_text: Query<&mut Text, With<HudPowerText>>,
    mut q_fill: Query<&mut Node, With<HudPowerBarFill>>,
) {
    let power = sim.0.power();
    for mut text in &mut q_text {
        text.0 = power_label(power);
    }
    for mut node in &mut q_fill {
        node.width = Val::Px(power_bar_px(power));
    }
}

pub(super) fn update_message_ui(
    time: Res<Time>,
    mut resolved: MessageReader<ShotResolved>,
    mut state: ResMut<MessageState>,
    mut q_message: Query<(&mut Text, &mut TextColor, &mut Visibility), With<HudMessageText>>,
) {
    for ShotResolved(outcome) in resolved.read() {
        let color = match outcome {
            ShotOutcome::Made => color_from_hex(Colors::MESSAGE_MADE),
            ShotOutcome::Missed => color_from_hex(Colors::MESSAGE_MISSED),
        };
        for (mut text, mut text_color, mut visibility) in &mut q_message {
            text.0 = outcome.message().to_string();
            text_color.0 = color;
            *visibility = Visibility::Visible;
        }
        state.timer.reset();
    }

    state.timer.tick(time.delta());
    if state.timer.just_finished() {
        for (_, _, mut visibility) in &mut q_message {
            *visibility = Visibility::Hidden;
        }
    }
}
