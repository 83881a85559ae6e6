use bevy::prelude::*;

use crate::constants::MESSAGE_DURATION_SECS;

pub(super) const STATS_LEFT: f32 = 20.0;
pub(super) const STATS_TOP: f32 = 20.0;
pub(super) const STATS_ROW_SPACING: f32 = 24.0;
pub(super) const POWER_BOTTOM: f32 = 24.0;
pub(super) const POWER_BAR_WIDTH: f32 = 150.0;
pub(super) const POWER_BAR_HEIGHT: f32 = 12.0;

#[derive(Component)]
pub(super) struct HudScoreText;

#[derive(Component)]
pub(super) struct HudShotsText;

#[derive(Component)]
pub(super) struct HudAccuracyText;

#[derive(Component)]
pub(super) struct HudPowerText;

#[derive(Component)]
pub(super) struct HudPowerBarFill;

#[derive(Component)]
pub(super) struct HudMessageText;

/// Countdown for the outcome banner. Starts expired so nothing shows until
/// the first shot resolves.
#[derive(Resource)]
pub(super) struct MessageState {
    pub(super) timer: Timer,
}

impl Default for MessageState {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(MESSAGE_DURATION_SECS, TimerMode::Once);
        let duration = timer.duration();
        timer.tick(duration);
        Self { timer }
    }
}

pub(super) fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

pub(super) fn shots_label(attempts: u32, makes: u32) -> String {
    format!("Shots: {makes}/{attempts}")
}

pub(super) fn accuracy_label(accuracy: f64) -> String {
    format!("Accuracy: {accuracy:.2}%")
}

pub(super) fn power_label(power: u32) -> String {
    format!("Power: {power}%")
}

/// Fill width in pixels for the current power level.
pub(super) fn power_bar_px(power: u32) -> f32 {
    POWER_BAR_WIDTH * power as f32 / 100.0
}
