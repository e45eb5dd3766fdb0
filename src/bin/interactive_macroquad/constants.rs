use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1200;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const CONFIG_ENV_VAR: &str = "PARABOLIC_CONFIG";

pub const CANVAS_LEFT: f32 = 20.0;
pub const CANVAS_TOP: f32 = 130.0;
pub const PANEL_X: f32 = 840.0;
pub const PANEL_Y: f32 = 130.0;
pub const PANEL_W: f32 = 340.0;
pub const PANEL_H: f32 = 330.0;

pub const TITLE_Y: f32 = 42.0;
pub const EQUATION_Y: f32 = 78.0;
pub const STATUS_Y: f32 = 110.0;

pub const A_RANGE: (f32, f32) = (-0.02, 0.02);
pub const B_RANGE: (f32, f32) = (-5.0, 5.0);
pub const C_RANGE: (f32, f32) = (0.0, 500.0);
pub const A_STEP: f64 = 0.001;
pub const B_STEP: f64 = 0.1;
pub const C_STEP: f64 = 1.0;

pub const WINDOW_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const CANVAS_BORDER: Color = Color::new(0.55, 0.58, 0.62, 1.0);
