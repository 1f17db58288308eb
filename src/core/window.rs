use crate::core::trajectory::{OptimalAngleResult, Trajectory, ramp_height_at};

pub const X_HEADROOM_M: f64 = 20.0;
pub const Y_FLOOR_PADDING_M: f64 = 20.0;
pub const Y_CEILING_PADDING_M: f64 = 10.0;
pub const RAMP_SAMPLES: usize = 400;

/// Visible data range of the draw surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Extent of the background picture shown before the first jump.
pub const INITIAL_AXIS_WINDOW: AxisWindow = AxisWindow {
    x_min: -50.0,
    x_max: 120.0,
    y_min: -10.0,
    y_max: 40.0,
};

impl AxisWindow {
    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).max(f64::EPSILON)
    }

    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).max(f64::EPSILON)
    }

    pub fn contains(&self, point: (f64, f64)) -> bool {
        (self.x_min..=self.x_max).contains(&point.0)
            && (self.y_min..=self.y_max).contains(&point.1)
    }
}

/// Bounds used after a jump: wide enough for the best achievable distance,
/// tall enough for the launch height and the apex.
///
/// Without an optimum the landing point sets the horizontal extent instead.
pub fn jump_axis_window(
    trajectory: &Trajectory,
    optimum: Option<&OptimalAngleResult>,
    start_height_m: f64,
) -> AxisWindow {
    let reach = optimum.map_or(trajectory.landing_distance_m(), |best| best.best_distance_m);
    let landing_y = trajectory.landing_point.1;
    AxisWindow {
        x_min: 0.0,
        x_max: reach + X_HEADROOM_M,
        y_min: trajectory.min_y().min(landing_y) - Y_FLOOR_PADDING_M,
        y_max: (start_height_m + Y_CEILING_PADDING_M)
            .max(trajectory.max_y() + Y_CEILING_PADDING_M),
    }
}

/// The landing ramp as drawn: a sampled line and the filled area below it.
#[derive(Clone, Debug, PartialEq)]
pub struct RampProfile {
    pub line: Vec<(f64, f64)>,
    pub fill: Vec<(f64, f64)>,
}

impl RampProfile {
    pub fn build(start_height_m: f64, slope: f64, window: &AxisWindow) -> Self {
        let x_start = 0.0;
        let x_end = window.x_max;
        let count = RAMP_SAMPLES.max(2);
        let line: Vec<(f64, f64)> = (0..count)
            .map(|i| {
                let x = x_start + (x_end - x_start) * i as f64 / (count - 1) as f64;
                (x, ramp_height_at(start_height_m, slope, x))
            })
            .collect();

        let mut fill = line.clone();
        fill.push((x_end, window.y_min));
        fill.push((x_start, window.y_min));

        Self { line, fill }
    }
}

/// Screen rectangle the axis window is mapped onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }

    pub fn world_to_screen(&self, window: &AxisWindow, world: (f64, f64)) -> (f32, f32) {
        let tx = ((world.0 - window.x_min) / window.width()) as f32;
        let ty = ((world.1 - window.y_min) / window.height()) as f32;
        (self.left + tx * self.width(), self.bottom - ty * self.height())
    }
}

/// Evenly spaced tick positions from `min` to `max` inclusive.
pub fn tick_values(min: f64, max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| min + (max - min) * i as f64 / intervals as f64)
        .collect()
}
