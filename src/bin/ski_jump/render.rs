use macroquad::prelude::*;
use ski_jump::core::playback::RenderCommand;
use ski_jump::core::window::{AxisWindow, PlotRect, tick_values};

use crate::constants::{
    CHART_TITLE, FALLBACK_MARKER_RADIUS, SKY_COLOR, SPRITE_HEIGHT_PX, TRAJECTORY_COLOR,
    TRAJECTORY_THICKNESS, X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn to_screen(rect: &PlotRect, window: &AxisWindow, world: (f64, f64)) -> Vec2 {
    let (x, y) = rect.world_to_screen(window, world);
    vec2(x, y)
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_plot_frame(rect: &PlotRect) {
    draw_rectangle_lines(
        rect.left,
        rect.top,
        rect.width(),
        rect.height(),
        2.0,
        DARKGRAY,
    );
}

/// Fills the plot with a texture, or the plain sky color when there is none.
pub(crate) fn draw_plot_image(rect: &PlotRect, texture: Option<&Texture2D>) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            rect.left,
            rect.top,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.width(), rect.height())),
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.left, rect.top, rect.width(), rect.height(), SKY_COLOR),
    }
}

pub(crate) fn draw_axis_tick_labels(rect: &PlotRect, window: &AxisWindow) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for value in tick_values(window.x_min, window.x_max, X_GRID_LINES) {
        let label = format_axis_value(value, window.width());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let p = to_screen(rect, window, (value, window.y_min));
        draw_ui_text(
            &label,
            p.x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size,
            label_color,
        );
    }

    for value in tick_values(window.y_min, window.y_max, Y_GRID_LINES) {
        let label = format_axis_value(value, window.height());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let p = to_screen(rect, window, (window.x_min, value));
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            p.y + (size.height * 0.35),
            tick_font_size,
            label_color,
        );
    }

    draw_ui_text(
        "Distance (m)",
        rect.right - 130.0,
        rect.bottom + 48.0,
        18,
        label_color,
    );
    draw_ui_text("Height (m)", rect.left + 10.0, rect.top - 8.0, 18, label_color);
}

pub(crate) fn draw_chart_title(rect: &PlotRect) {
    let size = measure_text(CHART_TITLE, None, 26, 1.0);
    draw_ui_text(
        CHART_TITLE,
        rect.left + (rect.width() - size.width) * 0.5,
        rect.top - 30.0,
        26,
        Color::from_rgba(30, 30, 35, 255),
    );
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    rect: &PlotRect,
    window: &AxisWindow,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = to_screen(rect, window, points[0]);
    for &point in points.iter().skip(1) {
        let cur = to_screen(rect, window, point);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_jumper(position: Vec2, sprite: Option<&Texture2D>) {
    match sprite {
        Some(sprite) => {
            let aspect = sprite.width() / sprite.height().max(1.0);
            let size = vec2(SPRITE_HEIGHT_PX * aspect, SPRITE_HEIGHT_PX);
            draw_texture_ex(
                sprite,
                position.x - size.x * 0.5,
                position.y - size.y * 0.5,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    ..Default::default()
                },
            );
        }
        None => {
            draw_circle(position.x, position.y, FALLBACK_MARKER_RADIUS, ORANGE);
            draw_circle_lines(position.x, position.y, FALLBACK_MARKER_RADIUS, 2.0, MAROON);
        }
    }
}

/// Draws one animation frame on top of the static chart.
pub(crate) fn draw_frame(
    command: &RenderCommand<'_>,
    rect: &PlotRect,
    window: &AxisWindow,
    sprite: Option<&Texture2D>,
) {
    draw_path(
        command.trail,
        rect,
        window,
        TRAJECTORY_THICKNESS,
        TRAJECTORY_COLOR,
    );
    draw_jumper(to_screen(rect, window, command.marker), sprite);
}
