use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::types::{
    power_label, score_label, shots_label, HudAccuracyText, HudMessageText, HudPowerBarFill,
    HudPowerText, HudScoreText, HudShotsText, POWER_BAR_HEIGHT, POWER_BAR_WIDTH, POWER_BOTTOM,
    STATS_LEFT, STATS_ROW_SPACING, STATS_TOP,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    let medium = TextFont::from_font_size(18.0);
    let small = TextFont::from_font_size(12.0);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(STATS_LEFT),
            top: Val::Px(STATS_TOP),
            ..default()
        },
        Text::new(score_label(0)),
        medium.clone(),
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        HudScoreText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(STATS_LEFT),
            top: Val::Px(STATS_TOP + STATS_ROW_SPACING),
            ..default()
        },
        Text::new(shots_label(0, 0)),
        medium.clone(),
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        HudShotsText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(STATS_LEFT),
            top: Val::Px(STATS_TOP + 2.0 * STATS_ROW_SPACING),
            ..default()
        },
        Text::new("Accuracy: 0.00%"),
        medium.clone(),
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        HudAccuracyText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(STATS_LEFT),
            bottom: Val::Px(POWER_BOTTOM + POWER_BAR_HEIGHT + 8.0),
            ..default()
        },
        Text::new(power_label(50)),
        medium.clone(),
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        HudPowerText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(STATS_LEFT),
                bottom: Val::Px(POWER_BOTTOM),
                width: Val::Px(POWER_BAR_WIDTH),
                height: Val::Px(POWER_BAR_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.4)),
            BorderColor::all(color_from_hex(Colors::HUD_DIM)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(POWER_BAR_WIDTH / 2.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color_from_hex(Colors::POWER_BAR)),
                HudPowerBarFill,
            ));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(50.0),
            top: Val::Percent(30.0),
            ..default()
        },
        Text::new(""),
        TextFont::from_font_size(42.0),
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        Visibility::Hidden,
        HudMessageText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(STATS_LEFT),
            bottom: Val::Px(POWER_BOTTOM),
            ..default()
        },
        Text::new("Arrows: move   W/S: power   Space: shoot   R: reset"),
        small,
        TextColor(color_from_hex(Colors::HUD_DIM)),
    ));
}
