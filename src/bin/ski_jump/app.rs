use log::info;
use macroquad::prelude::*;
use ski_jump::core::window::{INITIAL_AXIS_WINDOW, PlotRect};

use crate::assets::{AssetPaths, Assets};
use crate::chart::ChartSize;
use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN, WINDOW_BG, WINDOW_TITLE,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::launch::{apply_actions, step_playback};
use crate::render::{
    draw_axis_tick_labels, draw_chart_title, draw_frame, draw_plot_frame, draw_plot_image,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn plot_rect(screen_w: f32, screen_h: f32) -> PlotRect {
    PlotRect {
        left: LEFT_MARGIN,
        right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
        top: TOP_MARGIN,
        bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
    }
}

pub(crate) async fn run() {
    let paths = AssetPaths::from_env();
    let assets = Assets::load(&paths).await;
    let mut state = AppRuntime::new(assets);
    info!("ski jump simulator ready");

    loop {
        let frame_dt = get_frame_time();
        let rect = plot_rect(screen_width(), screen_height());

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_playback(&mut state, frame_dt);
        state.refresh_chart(ChartSize::from_plot(rect.width(), rect.height()));

        clear_background(WINDOW_BG);

        match state.session.run() {
            Some(run) => {
                draw_plot_image(&rect, state.chart_texture());
                if let Some(command) = state.session.current_command() {
                    draw_frame(&command, &rect, &run.window, state.assets.sprite.as_ref());
                }
                draw_axis_tick_labels(&rect, &run.window);
            }
            None => {
                draw_plot_image(&rect, state.assets.background.as_ref());
                draw_axis_tick_labels(&rect, &INITIAL_AXIS_WINDOW);
            }
        }
        draw_plot_frame(&rect);
        draw_chart_title(&rect);
        draw_hud(&state.session);

        next_frame().await;
    }
}
