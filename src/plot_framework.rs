// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::axis_names::AXIS_COUNT;
use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FLAT,
    RANGE_PADDING_FRACTION,
};
use crate::types::StackedPanelData;

/// Value range of a panel: the data span grown by [`RANGE_PADDING_FRACTION`]
/// on each side, or by [`RANGE_PADDING_FLAT`] when the data is flat.
pub fn calculate_range(a: f64, b: f64) -> (f64, f64) {
    let (low, high) = (a.min(b), a.max(b));
    let span = high - low;
    let pad = if span < 1e-6 {
        RANGE_PADDING_FLAT
    } else {
        span * RANGE_PADDING_FRACTION
    };
    (low - pad, high + pad)
}

/// Formats a Y-axis tick label.
///
/// Large magnitudes use k/M notation, small fractional values keep one
/// decimal, everything else is rounded to an integer. Degree and radian
/// axes always keep one decimal below 10.
pub fn format_y_tick(y: f64, y_label: &str) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0
        && (y.fract() != 0.0 || y_label.contains("[deg]") || y_label.contains("[rad]"))
    {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Expands samples into a staircase so the value holds until the next sample.
pub fn to_step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut stepped = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            stepped.push((x, points[i - 1].1));
        }
        stepped.push((x, y));
    }
    stepped
}

/// Min and max over the finite values of every series, if any.
pub fn finite_value_bounds(series: &[PlotSeries]) -> Option<(f64, f64)> {
    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for s in series {
        for &(_, y) in &s.data {
            if y.is_finite() {
                val_min = val_min.min(y);
                val_max = val_max.max(y);
            }
        }
    }
    if val_min.is_finite() && val_max.is_finite() {
        Some((val_min, val_max))
    } else {
        None
    }
}

/// Builds a time-series panel spanning the finite data of `series`.
///
/// Reference series (`reference`) are stretched over the data's time span
/// and included in the value range; they do not count as data on their own.
pub fn time_series_panel(
    title: String,
    mut series: Vec<PlotSeries>,
    reference: Vec<(f64, PlotSeries)>,
    y_label: &str,
) -> Option<StackedPanelData> {
    let mut time_min = f64::INFINITY;
    let mut time_max = f64::NEG_INFINITY;
    for s in &series {
        for &(t, y) in &s.data {
            if t.is_finite() && y.is_finite() {
                time_min = time_min.min(t);
                time_max = time_max.max(t);
            }
        }
    }
    let (mut val_min, mut val_max) = finite_value_bounds(&series)?;
    if time_max <= time_min {
        return None;
    }

    for (level, mut line) in reference {
        val_min = val_min.min(level);
        val_max = val_max.max(level);
        line.data = vec![(time_min, level), (time_max, level)];
        series.push(line);
    }

    let (y_min, y_max) = calculate_range(val_min, val_max);
    Some((
        title,
        time_min..time_max,
        y_min..y_max,
        series,
        "Time (s)".to_string(),
        y_label.to_string(),
    ))
}

/// Grows the value range of `panel` so it covers at least `low..high`.
pub fn with_min_y_range(panel: StackedPanelData, (low, high): (f64, f64)) -> StackedPanelData {
    let (title, x_range, y_range, series, x_label, y_label) = panel;
    let y_range = y_range.start.min(low)..y_range.end.max(high);
    (title, x_range, y_range, series, x_label, y_label)
}

/// Writes a centred placeholder into a panel that has nothing to draw.
fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    panel_name: &str,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let style = ("sans-serif", FONT_SIZE_MESSAGE)
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let message = format!("{panel_name} {plot_type} Data Unavailable: {reason}");
    area.draw(&Text::new(message, (width as i32 / 2, height as i32 / 2), style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Draws one chart panel: mesh, line series and legend.
fn draw_single_axis_chart_with_config(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .y_label_formatter(&|y| format_y_tick(*y, &plot_config.y_label))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }

        // NaN samples break the line rather than poisoning the whole path.
        let segments = s
            .data
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|segment| !segment.is_empty());

        let mut labelled = false;
        for segment in segments {
            let series = chart.draw_series(LineSeries::new(
                segment.iter().cloned(),
                s.color.stroke_width(s.stroke_width),
            ))?;
            if !labelled && !s.label.is_empty() {
                series.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        s.color.stroke_width(LINE_WIDTH_LEGEND),
                    )
                });
                labelled = true;
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Draws one PNG with a panel per axis, stacked vertically.
///
/// `get_axis_plot_data` is called once per panel index; returning `None`
/// (or a panel without plottable data) draws a placeholder message instead.
pub fn draw_stacked_plot<F>(
    output_filename: &str,
    root_name: &str,
    plot_type_name: &str,
    panel_names: &[&str; AXIS_COUNT],
    mut get_axis_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<StackedPanelData>,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE).into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((AXIS_COUNT, 1));
    let mut any_axis_plotted = false;

    for (axis_index, area) in sub_plot_areas.iter().enumerate() {
        let panel_name = panel_names[axis_index];
        match get_axis_plot_data(axis_index) {
            Some((chart_title, x_range, y_range, series_data, x_label, y_label)) => {
                let has_data = series_data.iter().any(|s| !s.data.is_empty());
                let valid_ranges = x_range.end > x_range.start && y_range.end > y_range.start;
                if has_data && valid_ranges {
                    let plot_config = PlotConfig {
                        title: chart_title,
                        x_range,
                        y_range,
                        series: series_data,
                        x_label,
                        y_label,
                    };
                    draw_single_axis_chart_with_config(area, &plot_config)?;
                    any_axis_plotted = true;
                } else {
                    let reason = if !has_data { "No data points" } else { "Invalid ranges" };
                    draw_unavailable_message(area, panel_name, plot_type_name, reason)?;
                }
            }
            None => {
                draw_unavailable_message(area, panel_name, plot_type_name, "No finite samples")?;
            }
        }
    }

    root_area.present()?;
    if any_axis_plotted {
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        println!(
            "  '{output_filename}' saved with placeholder messages only: no axis had data to plot."
        );
    }
    Ok(())
}


// src/plot_framework.rs
