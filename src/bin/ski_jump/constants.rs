use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const WINDOW_TITLE: &str = "Animated Ski Jump Simulator";
pub const CHART_TITLE: &str = "Animated ski jump";

pub const DEFAULT_BACKGROUND_PATH: &str = "assets/montana.png";
pub const DEFAULT_SPRITE_PATH: &str = "assets/sky.png";
pub const BACKGROUND_PATH_ENV: &str = "SKI_JUMP_BACKGROUND";
pub const SPRITE_PATH_ENV: &str = "SKI_JUMP_SPRITE";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 24.0;
pub const PANEL_W: f32 = 360.0;
pub const PANEL_H: f32 = 250.0;
pub const STATUS_Y: f32 = PANEL_Y + PANEL_H + 36.0;

pub const LEFT_MARGIN: f32 = PANEL_X + PANEL_W + 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 70.0;
pub const BOTTOM_MARGIN: f32 = 80.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const GRID_DOT_SAMPLES: usize = 120;
pub const RAMP_DASH_POINTS: usize = 8;

pub const TRAJECTORY_THICKNESS: f32 = 2.5;
pub const SPRITE_HEIGHT_PX: f32 = 56.0;
pub const FALLBACK_MARKER_RADIUS: f32 = 8.0;
pub const LANDING_MARKER_RADIUS: i32 = 5;

pub const WINDOW_BG: Color = Color::new(0.95, 0.96, 0.97, 1.0);
pub const SKY_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
