pub const MESSAGE_DURATION_SECS: f32 = 2.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const SKY: u32 = 0x87ceeb;
    pub const COURT: u32 = 0xcd853f;
    pub const COURT_LINE: u32 = 0xffffff;
    pub const BALL: u32 = 0xf88158;
    pub const BALL_SEAM: u32 = 0x222222;
    pub const POLE: u32 = 0x444444;
    pub const BACKBOARD: u32 = 0xffffff;
    pub const RIM: u32 = 0xff4500;
    pub const NET: u32 = 0xeeeeee;
    pub const TRAJECTORY: u32 = 0xff3333;
    pub const HUD_TEXT: u32 = 0xffffff;
    pub const HUD_DIM: u32 = 0xbbbbbb;
    pub const POWER_BAR: u32 = 0x44ff88;
    pub const MESSAGE_MADE: u32 = 0x44ff88;
    pub const MESSAGE_MISSED: u32 = 0xff6666;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
