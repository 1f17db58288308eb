use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrameActions {
    pub(crate) jump: bool,
    pub(crate) cancel: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            jump: self.jump || other.jump,
            cancel: self.cancel || other.cancel,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        jump: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        cancel: is_key_pressed(KeyCode::Escape),
    }
}

pub(crate) fn jump_button_label(trigger_enabled: bool) -> &'static str {
    if trigger_enabled {
        "Jump (Enter)"
    } else {
        "Jumping... (Esc cancels)"
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let trigger_enabled = state.session.trigger_enabled();
    let mut actions = FrameActions::default();

    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Jump setup")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.input_text(hash!(), "Initial speed (m/s)", &mut state.form.speed);
            ui.input_text(hash!(), "Angle (degrees)", &mut state.form.angle);
            ui.input_text(
                hash!(),
                "Slope (magnitude, downhill)",
                &mut state.form.slope_magnitude,
            );
            ui.input_text(hash!(), "Height (m)", &mut state.form.height);
            ui.separator();
            // The button stays on screen while playing but does nothing.
            if ui.button(None, jump_button_label(trigger_enabled)) && trigger_enabled {
                actions.jump = true;
            }
            if !trigger_enabled && ui.button(None, "Cancel") {
                actions.cancel = true;
            }
        });

    actions
}
