// src/plot_functions/plot_orbita_position.rs

use std::error::Error;

use crate::axis_names::{OrbitaAxis, AXIS_NAMES};
use crate::constants::{COLOR_MEASURED, COLOR_TARGET, LINE_WIDTH_PLOT};
use crate::data_input::log_data::Sample;
use crate::plot_framework::{draw_stacked_plot, time_series_panel, to_step_points, PlotSeries};
use crate::types::AllAxisTimeSeries;

/// Generates the stacked measured vs target orientation plot, in degrees.
pub fn plot_orbita_position(samples: &[Sample], root_name: &str) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_OrbitaPosition_stacked.png");
    let plot_type_name = "Orbita Position";

    let mut present: AllAxisTimeSeries = Default::default();
    let mut target: AllAxisTimeSeries = Default::default();
    for sample in samples {
        for axis in OrbitaAxis::ALL {
            present[axis.index()].push((sample.timestamp, sample.present[axis].to_degrees()));
            target[axis.index()].push((sample.timestamp, sample.target[axis].to_degrees()));
        }
    }

    draw_stacked_plot(&output_file, root_name, plot_type_name, &AXIS_NAMES, |axis_index| {
        let series = vec![
            PlotSeries {
                data: to_step_points(&present[axis_index]),
                label: "measured".to_string(),
                color: *COLOR_MEASURED,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: to_step_points(&target[axis_index]),
                label: "target".to_string(),
                color: *COLOR_TARGET,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ];
        time_series_panel(
            format!("{} Orbita Position", AXIS_NAMES[axis_index]),
            series,
            Vec::new(),
            "orbita position [deg]",
        )
    })
}

// src/plot_functions/plot_orbita_position.rs
