// src/constants.rs

use std::f64::consts::TAU;

use plotters::style::colors::full_palette::{BLUE, GREY_700, LIGHTBLUE, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Value range padding: fraction of the data span, or a flat amount for constant data.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const RANGE_PADDING_FLAT: f64 = 0.5;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_REFERENCE: u32 = 2;

// --- Plot Color Assignments ---
pub const COLOR_MEASURED: &RGBColor = &LIGHTBLUE;
pub const COLOR_TARGET: &RGBColor = &ORANGE;
pub const COLOR_AXIS_SENSOR: &RGBColor = &BLUE;
pub const COLOR_AXIS_FROM_MOTOR: &RGBColor = &ORANGE;
pub const COLOR_BACKLASH: &RGBColor = &PURPLE;
pub const COLOR_TORQUE_LIMIT: &RGBColor = &GREY_700;
pub const COLOR_ZERO_LINE: &RGBColor = &RED;

// Raw torque reading corresponding to 100% of the allowed torque.
pub const MAX_ALLOWED_TORQUE: f64 = 100.0;
// The torque panels always show at least this range, so the limit lines sit at half height.
pub const TORQUE_PLOT_Y_RANGE: (f64, f64) = (-200.0, 200.0);

// --- Trajectory Synthesis Defaults ---
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 1000.0;
pub const DEFAULT_PROFILE_DURATION_S: f64 = 5.0;
pub const DEFAULT_AMPLITUDE_DEG: f64 = 20.0;
pub const DEFAULT_FREQUENCY_HZ: f64 = 1.0;
pub const DEFAULT_STEP_TIME_S: f64 = 1.0;

// Ramp: settle, then climb to RAMP_PEAK_RAD and come back down.
pub const RAMP_SETTLE_TIME_S: f64 = 0.1;
pub const RAMP_TICK_PERIOD_S: f64 = 0.01;
pub const RAMP_TICKS_PER_LEG: usize = 500;
pub const RAMP_PEAK_RAD: f64 = TAU;

// Velocity and torque limits, as a fraction of the motor maximum.
pub const DEFAULT_LIMIT_FRACTION: f64 = 1.0;

// Output file names written by the trajectory generator.
pub const SINUSOID_OUTPUT_FILE: &str = "test_sinus_input.csv";
pub const STEP_OUTPUT_FILE: &str = "test_step_input.csv";
pub const RAMP_OUTPUT_FILE: &str = "test_input.csv";

// --- Reconciliation ---
// Calibration zeros drifting by more than this between rows get reported.
pub const AXIS_ZERO_TOLERANCE_RAD: f64 = 1e-9;

// src/constants.rs
