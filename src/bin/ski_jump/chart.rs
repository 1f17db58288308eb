use std::error::Error;

use macroquad::prelude::{FilterMode, Texture2D};
use plotters::prelude::*;
use ski_jump::core::playback::JumpRun;
use ski_jump::core::window::{AxisWindow, tick_values};

use crate::constants::{
    GRID_DOT_SAMPLES, LANDING_MARKER_RADIUS, RAMP_DASH_POINTS, X_GRID_LINES, Y_GRID_LINES,
};

const SKY: RGBColor = RGBColor(135, 206, 235);
const SADDLE_BROWN: RGBColor = RGBColor(139, 69, 19);

type ChartResult<T> = Result<T, Box<dyn Error>>;

/// Pixel size of the static chart bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChartSize {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl ChartSize {
    pub(crate) fn from_plot(width: f32, height: f32) -> Self {
        Self {
            width: width.round().clamp(16.0, 4096.0) as u32,
            height: height.round().clamp(16.0, 4096.0) as u32,
        }
    }
}

fn line_between(from: (f64, f64), to: (f64, f64), samples: usize) -> Vec<(f64, f64)> {
    let count = samples.max(2);
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
        })
        .collect()
}

/// Alternating on/off runs of `run_len` points.
fn dashes(points: &[(f64, f64)], run_len: usize) -> Vec<Vec<(f64, f64)>> {
    points
        .chunks(run_len.max(2))
        .step_by(2)
        .map(<[(f64, f64)]>::to_vec)
        .collect()
}

fn grid_lines(window: &AxisWindow) -> Vec<Vec<(f64, f64)>> {
    let vertical = tick_values(window.x_min, window.x_max, X_GRID_LINES)
        .into_iter()
        .map(|x| line_between((x, window.y_min), (x, window.y_max), GRID_DOT_SAMPLES));
    let horizontal = tick_values(window.y_min, window.y_max, Y_GRID_LINES)
        .into_iter()
        .map(|y| line_between((window.x_min, y), (window.x_max, y), GRID_DOT_SAMPLES));
    vertical.chain(horizontal).collect()
}

/// Draws the parts of a jump that do not move during playback: sky, dotted
/// grid, filled ramp, dashed ramp outline and landing marker. Returns RGBA
/// pixels.
pub(crate) fn render_static_layer(run: &JumpRun, size: ChartSize) -> ChartResult<Vec<u8>> {
    let mut rgb = vec![0u8; size.width as usize * size.height as usize * 3];
    {
        let root =
            BitMapBackend::with_buffer(&mut rgb, (size.width, size.height)).into_drawing_area();
        root.fill(&SKY)?;

        let window = run.window;
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)?;

        let grid_style = BLACK.mix(0.35);
        for line in grid_lines(&window) {
            chart.draw_series(
                dashes(&line, 2)
                    .into_iter()
                    .map(|dot| PathElement::new(dot, grid_style)),
            )?;
        }

        chart.draw_series(std::iter::once(Polygon::new(
            run.ramp.fill.clone(),
            SADDLE_BROWN.filled(),
        )))?;
        chart.draw_series(
            dashes(&run.ramp.line, RAMP_DASH_POINTS)
                .into_iter()
                .map(|dash| PathElement::new(dash, BLACK.stroke_width(2))),
        )?;
        chart.draw_series(std::iter::once(Circle::new(
            run.trajectory.landing_point,
            LANDING_MARKER_RADIUS,
            RED.filled(),
        )))?;

        root.present()?;
    }
    Ok(rgb_to_rgba(&rgb))
}

fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    rgb.chunks_exact(3)
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect()
}

pub(crate) fn chart_texture(run: &JumpRun, size: ChartSize) -> ChartResult<Texture2D> {
    let rgba = render_static_layer(run, size)?;
    let texture = Texture2D::from_rgba8(size.width as u16, size.height as u16, &rgba);
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ski_jump::core::trajectory::{AngleSweep, LaunchParameters};

    fn reference_run() -> JumpRun {
        JumpRun::compute(
            LaunchParameters {
                initial_speed_mps: 25.0,
                launch_angle_deg: 22.8,
                slope: -1.0,
                start_height_m: 20.0,
            },
            300,
            AngleSweep::default(),
        )
        .expect("reference jump lands")
    }

    #[test]
    fn dashes_skip_every_other_run() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 0.0)).collect();
        let runs = dashes(&points, 3);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(runs[1], vec![(6.0, 0.0), (7.0, 0.0), (8.0, 0.0)]);
    }

    #[test]
    fn grid_has_one_line_per_tick() {
        let lines = grid_lines(&reference_run().window);
        assert_eq!(lines.len(), X_GRID_LINES + 1 + Y_GRID_LINES + 1);
    }

    #[test]
    fn static_layer_fills_the_whole_bitmap() {
        let size = ChartSize {
            width: 120,
            height: 80,
        };
        let rgba = render_static_layer(&reference_run(), size).expect("bitmap render");
        assert_eq!(rgba.len(), 120 * 80 * 4);
        assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));
        assert!(rgba.chunks_exact(4).any(|px| px[..3] == [135, 206, 235]));
        assert!(rgba.chunks_exact(4).any(|px| px[..3] == [139, 69, 19]));
    }
}
