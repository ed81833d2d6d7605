// tests/backlash_pipeline_test.rs

use std::f64::consts::TAU;
use std::fs;
use std::io::Write;

use orbita3d_backlash::axis_names::MotorAxis;
use orbita3d_backlash::data_analysis::angle_reconciliation::reconcile_samples;
use orbita3d_backlash::data_analysis::backlash_summary::summarize_backlash;
use orbita3d_backlash::data_input::log_parser::{parse_log_file, required_columns};
use orbita3d_backlash::error::AnalysisError;

const BACKLASH_RAD: [f64; 3] = [0.0, 0.01, -0.02];
const ZEROS_RAD: [f64; 3] = [0.3, 6.2, 3.1];

/// Value of `column` in row `i` of a synthetic bench log.
///
/// Each axis sweeps across the sensor seam while its motor lags or leads by
/// a fixed backlash and accumulates whole turns.
fn cell(column: &str, i: usize) -> f64 {
    let t = i as f64 * 0.001;
    let axis = MotorAxis::ALL
        .into_iter()
        .find(|axis| column.ends_with(&format!("_{}", axis.log_suffix())));
    let sensor = |k: usize| (ZEROS_RAD[k] + 0.05 * i as f64).rem_euclid(TAU);
    match (column, axis) {
        ("timestamp", _) => t,
        (c, Some(axis)) if c.starts_with("axis_sensor") => sensor(axis.index()),
        (c, Some(axis)) if c.starts_with("axis_zeros") => ZEROS_RAD[axis.index()],
        (c, Some(axis)) if c.starts_with("present_pos") => {
            let k = axis.index();
            sensor(k) + BACKLASH_RAD[k] + (i % 4) as f64 * TAU
        }
        _ => 0.0,
    }
}

fn write_log(columns: &[String], rows: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", columns.join(",")).unwrap();
    for i in 0..rows {
        let line: Vec<String> = columns.iter().map(|c| cell(c, i).to_string()).collect();
        writeln!(file, "{}", line.join(",")).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_backlash_recovered_across_seam_and_turns() {
    let log = write_log(&required_columns(), 400);
    let samples = parse_log_file(log.path()).unwrap();
    assert_eq!(samples.len(), 400);

    let series = reconcile_samples(&samples).unwrap();
    for axis in MotorAxis::ALL {
        let expected = BACKLASH_RAD[axis.index()];
        for (i, &e) in series.axes[axis].backlash.iter().enumerate() {
            assert!((e - expected).abs() < 1e-9, "{axis:?} sample {i}: {e} vs {expected}");
        }
        let summary = summarize_backlash(&series.axes[axis]).unwrap();
        assert!(summary.peak_to_peak < 1e-8);
        assert_eq!(summary.nan_count, 0);
    }
}

#[test]
fn test_column_order_does_not_matter() {
    let columns = required_columns();
    let mut shuffled = columns.clone();
    shuffled.reverse();
    shuffled.swap(0, 7);

    let a = parse_log_file(write_log(&columns, 20).path()).unwrap();
    let b = parse_log_file(write_log(&shuffled, 20).path()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_column_aborts_analysis() {
    let columns: Vec<String> = required_columns()
        .into_iter()
        .filter(|c| c != "present_pos_top")
        .collect();
    let log = write_log(&columns, 5);

    match parse_log_file(log.path()) {
        Err(AnalysisError::MissingColumn(name)) => assert_eq!(name, "present_pos_top"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

/// Overwrites the cell of `column` in data row `row` (0-based) with `value`.
fn corrupt_cell(log: &tempfile::NamedTempFile, column: &str, row: usize, value: &str) {
    let position = required_columns().iter().position(|c| c == column).unwrap();
    let text = fs::read_to_string(log.path()).unwrap();
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let mut cells: Vec<String> = lines[row + 1].split(',').map(str::to_string).collect();
    cells[position] = value.to_string();
    lines[row + 1] = cells.join(",");
    fs::write(log.path(), lines.join("\n")).unwrap();
}

#[test]
fn test_malformed_cell_only_invalidates_its_sample() {
    let log = write_log(&required_columns(), 10);
    corrupt_cell(&log, "axis_sensor_mid", 3, "n/a");

    let samples = parse_log_file(log.path()).unwrap();
    assert_eq!(samples.len(), 10);
    let series = reconcile_samples(&samples).unwrap();

    let mid = &series.axes[MotorAxis::Mid].backlash;
    assert!(mid[3].is_nan());
    assert_eq!(mid.iter().filter(|e| e.is_nan()).count(), 1);
    assert!(series.axes[MotorAxis::Top].backlash.iter().all(|e| e.is_finite()));
    assert_eq!(summarize_backlash(&series.axes[MotorAxis::Mid]).unwrap().nan_count, 1);
}

#[test]
fn test_malformed_zero_in_first_row_keeps_axis_usable() {
    let log = write_log(&required_columns(), 10);
    corrupt_cell(&log, "axis_zeros_top", 0, "n/a");

    let samples = parse_log_file(log.path()).unwrap();
    assert!(samples[0].axis_zeros[MotorAxis::Top].is_nan());
    let series = reconcile_samples(&samples).unwrap();

    let top = &series.axes[MotorAxis::Top];
    assert_eq!(top.axis_zero, ZEROS_RAD[MotorAxis::Top.index()]);
    for (i, &e) in top.backlash.iter().enumerate() {
        assert!(e.abs() < 1e-9, "top sample {i}: {e}");
    }
    assert_eq!(summarize_backlash(top).unwrap().nan_count, 0);
}

#[test]
fn test_empty_log_is_reported() {
    let log = write_log(&required_columns(), 0);
    let samples = parse_log_file(log.path()).unwrap();
    assert!(matches!(reconcile_samples(&samples), Err(AnalysisError::EmptyLog)));
}
