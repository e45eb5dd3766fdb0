use macroquad::prelude::*;
use parabolic_target::core::readout::Tone;

use crate::constants::{CANVAS_LEFT, EQUATION_Y, STATUS_Y, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => DARKGRAY,
        Tone::Success => Color::from_rgba(46, 125, 50, 255),
        Tone::Failure => RED,
    }
}

pub(crate) fn draw_hud(state: &AppRuntime, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Parabolic Target - hit the target with y = ax² + bx + c",
        CANVAS_LEFT,
        TITLE_Y,
        28,
        header_color,
        font,
    );

    let equation = state.session.equation_text();
    draw_ui_text(&equation, CANVAS_LEFT, EQUATION_Y, 26, BLUE, font);
    let equation_size = measure_text(&equation, font, 26, 1.0);
    draw_ui_text(
        &state.session.target_text(),
        CANVAS_LEFT + equation_size.width + 40.0,
        EQUATION_Y,
        22,
        DARKGRAY,
        font,
    );

    let status = state.session.status();
    draw_ui_text(
        status.message(),
        CANVAS_LEFT,
        STATUS_Y,
        24,
        tone_color(status.tone()),
        font,
    );
}
