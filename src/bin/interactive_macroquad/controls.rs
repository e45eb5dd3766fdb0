use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{A_RANGE, B_RANGE, C_RANGE, PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
    pub(crate) export: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
            export: self.export || other.export,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        export: is_key_pressed(KeyCode::E),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Coefficients")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(hash!(), "a", A_RANGE.0..A_RANGE.1, &mut state.sliders.a);
            ui.slider(hash!(), "b", B_RANGE.0..B_RANGE.1, &mut state.sliders.b);
            ui.slider(hash!(), "c", C_RANGE.0..C_RANGE.1, &mut state.sliders.c);

            let snapped = state.sliders.coefficients();
            ui.label(None, &format!("a = {:.3}", snapped.a));
            ui.label(None, &format!("b = {:.1}", snapped.b));
            ui.label(None, &format!("c = {:.0}", snapped.c));
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Export PNG (E)") {
                actions.export = true;
            }
        });

    actions
}
