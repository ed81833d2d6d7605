// src/plot_functions/plot_backlash.rs

use std::error::Error;

use crate::axis_names::{MotorAxis, MOTOR_NAMES};
use crate::constants::{COLOR_BACKLASH, COLOR_ZERO_LINE, LINE_WIDTH_PLOT};
use crate::data_analysis::angle_reconciliation::BacklashSeries;
use crate::plot_functions::plot_axis_angles::degrees_over_time;
use crate::plot_framework::{draw_stacked_plot, time_series_panel, to_step_points, PlotSeries};

/// Generates the stacked signed backlash plot, one panel per motor axis.
pub fn plot_backlash(series: &BacklashSeries, root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_Backlash_stacked.png");
    let plot_type_name = "Backlash";

    draw_stacked_plot(&output_file, root_name, plot_type_name, &MOTOR_NAMES, |axis_index| {
        let axis = &series.axes[MotorAxis::ALL[axis_index]];
        let backlash = PlotSeries {
            data: to_step_points(&degrees_over_time(&series.timestamps, &axis.backlash)),
            label: "backlash [deg]".to_string(),
            color: *COLOR_BACKLASH,
            stroke_width: LINE_WIDTH_PLOT,
        };
        let zero_line = PlotSeries {
            data: Vec::new(),
            label: String::new(),
            color: *COLOR_ZERO_LINE,
            stroke_width: LINE_WIDTH_PLOT,
        };
        time_series_panel(
            format!("{} Backlash", MOTOR_NAMES[axis_index]),
            vec![backlash],
            vec![(0.0, zero_line)],
            "backlash axis position [deg]",
        )
    })
}

// src/plot_functions/plot_backlash.rs
