// src/data_input/log_data.rs

use crate::axis_names::{MotorArray, OrbitaArray};

/// One row of a logged bench response.
///
/// Angles are in radians. A cell that could not be parsed is stored as
/// `f64::NAN` so the sample keeps its slot in the time series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub timestamp: f64,                      // Seconds since the start of the run.
    pub target: OrbitaArray<f64>,            // Commanded orientation [Roll, Pitch, Yaw].
    pub present: OrbitaArray<f64>,           // Measured orientation [Roll, Pitch, Yaw].
    pub present_pos: MotorArray<f64>,        // Raw multi-turn motor shaft angle [Top, Mid, Bot].
    pub present_velocity: MotorArray<f64>,   // Raw motor velocity [Top, Mid, Bot].
    pub present_torque: MotorArray<f64>,     // Raw motor torque [Top, Mid, Bot].
    pub axis_sensor: MotorArray<f64>,        // Absolute single-turn axis sensor [Top, Mid, Bot].
    pub axis_zeros: MotorArray<f64>,         // Calibration zero per axis sensor [Top, Mid, Bot].
}

// src/data_input/log_data.rs
