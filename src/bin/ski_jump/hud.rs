use macroquad::prelude::*;
use ski_jump::core::playback::{PlaybackPhase, SimulationSession};

use crate::constants::{PANEL_X, STATUS_Y};
use crate::render::draw_ui_text;

pub(crate) fn phase_text(phase: PlaybackPhase) -> &'static str {
    match phase {
        PlaybackPhase::Idle => "Ready",
        PlaybackPhase::Playing => "Jumping",
        PlaybackPhase::Finished => "Landed",
        PlaybackPhase::Cancelled => "Cancelled",
    }
}

/// Status region under the control panel.
pub(crate) fn draw_hud(session: &SimulationSession) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let mut y = STATUS_Y;

    for line in session.status().lines() {
        draw_ui_text(line, PANEL_X, y, 24, header_color);
        y += 30.0;
    }

    let animation = session.animation();
    let progress = match animation.presented_frame() {
        Some(frame) => format!(
            "State: {} | frame {}/{}",
            phase_text(animation.phase()),
            frame + 1,
            animation.total_frames()
        ),
        None => format!("State: {}", phase_text(animation.phase())),
    };
    draw_ui_text(&progress, PANEL_X, y + 10.0, 18, DARKGRAY);

    if let Some(run) = session.run() {
        draw_ui_text(
            &format!(
                "Launched {} | v0 {:.1} m/s | {:.1} deg | h {:.1} m",
                run.launched_at.format("%H:%M:%S"),
                run.params.initial_speed_mps,
                run.params.launch_angle_deg,
                run.params.start_height_m
            ),
            PANEL_X,
            y + 36.0,
            18,
            DARKGRAY,
        );
    }
}
