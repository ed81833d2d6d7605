// src/plot_functions/plot_motor_channels.rs

use std::error::Error;

use crate::axis_names::{MotorArray, MotorAxis, MOTOR_NAMES};
use crate::constants::{
    COLOR_MEASURED, COLOR_TORQUE_LIMIT, LINE_WIDTH_PLOT, LINE_WIDTH_REFERENCE, MAX_ALLOWED_TORQUE,
    TORQUE_PLOT_Y_RANGE,
};
use crate::data_input::log_data::Sample;
use crate::plot_framework::{
    draw_stacked_plot, time_series_panel, to_step_points, with_min_y_range, PlotSeries,
};
use crate::types::{AllAxisTimeSeries, StackedPanelData};

/// Limit lines drawn over a channel and the value range kept visible around them.
struct ChannelLimits {
    levels: &'static [f64],
    min_y_range: (f64, f64),
}

const TORQUE_LIMITS: ChannelLimits = ChannelLimits {
    levels: &[MAX_ALLOWED_TORQUE, -MAX_ALLOWED_TORQUE],
    min_y_range: TORQUE_PLOT_Y_RANGE,
};

/// Splits one per-motor channel of the log into a time series per motor.
fn motor_channel_series(
    samples: &[Sample],
    channel: fn(&Sample) -> MotorArray<f64>,
) -> AllAxisTimeSeries {
    let mut axis_plot_data: AllAxisTimeSeries = Default::default();
    for sample in samples {
        let values = channel(sample);
        for axis in MotorAxis::ALL {
            axis_plot_data[axis.index()].push((sample.timestamp, values[axis]));
        }
    }
    axis_plot_data
}

fn plot_motor_channel(
    samples: &[Sample],
    root_name: &str,
    plot_type_name: &str,
    file_tag: &str,
    y_label: &str,
    channel: fn(&Sample) -> MotorArray<f64>,
    limits: Option<&ChannelLimits>,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_{file_tag}_stacked.png");
    let axis_plot_data = motor_channel_series(samples, channel);

    draw_stacked_plot(&output_file, root_name, plot_type_name, &MOTOR_NAMES, |axis_index| {
        channel_panel(
            &axis_plot_data[axis_index],
            format!("{} {}", MOTOR_NAMES[axis_index], plot_type_name),
            y_label,
            limits,
        )
    })
}

fn channel_panel(
    data: &[(f64, f64)],
    title: String,
    y_label: &str,
    limits: Option<&ChannelLimits>,
) -> Option<StackedPanelData> {
    let measured = PlotSeries {
        data: to_step_points(data),
        label: "measured".to_string(),
        color: *COLOR_MEASURED,
        stroke_width: LINE_WIDTH_PLOT,
    };
    let levels = limits.map_or(&[][..], |l| l.levels);
    let reference = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let line = PlotSeries {
                data: Vec::new(),
                // One legend entry for the symmetric pair of limits.
                label: if i == 0 {
                    "max allowed torque".to_string()
                } else {
                    String::new()
                },
                color: *COLOR_TORQUE_LIMIT,
                stroke_width: LINE_WIDTH_REFERENCE,
            };
            (level, line)
        })
        .collect();

    let panel = time_series_panel(title, vec![measured], reference, y_label)?;
    Some(match limits {
        Some(limits) => with_min_y_range(panel, limits.min_y_range),
        None => panel,
    })
}

/// Raw multi-turn motor positions.
pub fn plot_motor_position(samples: &[Sample], root_name: &str) -> Result<(), Box<dyn Error>> {
    plot_motor_channel(
        samples,
        root_name,
        "Motor Position",
        "MotorPosition",
        "position [rad]",
        |s| s.present_pos,
        None,
    )
}

pub fn plot_motor_velocity(samples: &[Sample], root_name: &str) -> Result<(), Box<dyn Error>> {
    plot_motor_channel(
        samples,
        root_name,
        "Motor Velocity",
        "MotorVelocity",
        "velocity [rad/s]",
        |s| s.present_velocity,
        None,
    )
}

/// Motor torque with the ±100% allowed-torque limits.
pub fn plot_motor_torque(samples: &[Sample], root_name: &str) -> Result<(), Box<dyn Error>> {
    plot_motor_channel(
        samples,
        root_name,
        "Motor Torque",
        "MotorTorque",
        "current [mA]",
        |s| s.present_torque,
        Some(&TORQUE_LIMITS),
    )
}


// src/plot_functions/plot_motor_channels.rs
