// src/plot_functions/plot_axis_angles.rs

use ndarray::Array1;
use std::error::Error;

use crate::axis_names::{MotorAxis, MOTOR_NAMES};
use crate::constants::{COLOR_AXIS_FROM_MOTOR, COLOR_AXIS_SENSOR, LINE_WIDTH_PLOT};
use crate::data_analysis::angle_reconciliation::BacklashSeries;
use crate::plot_framework::{draw_stacked_plot, time_series_panel, to_step_points, PlotSeries};

/// Pairs a reconciled angle series with the run's timestamps, in degrees.
pub(crate) fn degrees_over_time(
    timestamps: &Array1<f64>,
    radians: &Array1<f64>,
) -> Vec<(f64, f64)> {
    timestamps
        .iter()
        .zip(radians.iter())
        .map(|(&t, &angle)| (t, angle.to_degrees()))
        .collect()
}

/// Generates the stacked sensed vs motor-derived axis angle plot.
pub fn plot_axis_angles(series: &BacklashSeries, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_AxisAngles_stacked.png");
    let plot_type_name = "Axis Angle";

    draw_stacked_plot(&output_file, root_name, plot_type_name, &MOTOR_NAMES, |axis_index| {
        let axis = &series.axes[MotorAxis::ALL[axis_index]];
        let sensor_deg = degrees_over_time(&series.timestamps, &axis.sensor_corrected);
        let panel_series = vec![
            PlotSeries {
                data: to_step_points(&sensor_deg),
                label: "actual [deg]".to_string(),
                color: *COLOR_AXIS_SENSOR,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: to_step_points(&degrees_over_time(&series.timestamps, &axis.motor_derived)),
                label: "estimated [deg]".to_string(),
                color: *COLOR_AXIS_FROM_MOTOR,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ];
        time_series_panel(
            format!("{} Axis Angle", MOTOR_NAMES[axis_index]),
            panel_series,
            Vec::new(),
            "motor position [deg]",
        )
    })
}

// src/plot_functions/plot_axis_angles.rs
