// src/types.rs
// Type aliases to reduce complexity warnings

use crate::axis_names::AXIS_COUNT;

// Compile-time assertion: the stacked plots and per-axis containers are laid out for three axes.
const _: () = assert!(AXIS_COUNT == 3, "AXIS_COUNT must be 3");

// Plot data types
pub type AxisTimeSeries = Vec<(f64, f64)>;
pub type AllAxisTimeSeries = [AxisTimeSeries; AXIS_COUNT];

// One panel of a stacked plot
pub type StackedPanelData = (
    String,                                 // title
    std::ops::Range<f64>,                   // x_range
    std::ops::Range<f64>,                   // y_range
    Vec<crate::plot_framework::PlotSeries>, // series
    String,                                 // x_label
    String,                                 // y_label
);
