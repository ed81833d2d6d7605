// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::axis_names::{MotorArray, MotorAxis, OrbitaArray, OrbitaAxis};
use crate::data_input::log_data::Sample;
use crate::error::{AnalysisError, AnalysisResult};

const TIMESTAMP_COLUMN: &str = "timestamp";

/// Column prefixes of per-orbita-axis channels (`<prefix>_roll`, ...).
const ORBITA_PREFIXES: [&str; 2] = ["target", "present"];

/// Column prefixes of per-motor channels (`<prefix>_top`, `<prefix>_mid`, `<prefix>_bot`).
const MOTOR_PREFIXES: [&str; 5] = [
    "present_pos",
    "present_velocity",
    "present_torque",
    "axis_sensor",
    "axis_zeros",
];

/// CSV column index of every channel a [`Sample`] is built from.
#[derive(Debug, Clone)]
struct ColumnLayout {
    timestamp: usize,
    target: OrbitaArray<usize>,
    present: OrbitaArray<usize>,
    present_pos: MotorArray<usize>,
    present_velocity: MotorArray<usize>,
    present_torque: MotorArray<usize>,
    axis_sensor: MotorArray<usize>,
    axis_zeros: MotorArray<usize>,
}

fn column_index(column_indices: &HashMap<String, usize>, name: &str) -> AnalysisResult<usize> {
    column_indices
        .get(name)
        .copied()
        .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))
}

fn orbita_indices(
    column_indices: &HashMap<String, usize>,
    prefix: &str,
) -> AnalysisResult<OrbitaArray<usize>> {
    let mut indices = OrbitaArray::default();
    for axis in OrbitaAxis::ALL {
        indices[axis] = column_index(column_indices, &axis.column(prefix))?;
    }
    Ok(indices)
}

fn motor_indices(
    column_indices: &HashMap<String, usize>,
    prefix: &str,
) -> AnalysisResult<MotorArray<usize>> {
    let mut indices = MotorArray::default();
    for axis in MotorAxis::ALL {
        indices[axis] = column_index(column_indices, &axis.log_column(prefix))?;
    }
    Ok(indices)
}

impl ColumnLayout {
    fn resolve(column_indices: &HashMap<String, usize>) -> AnalysisResult<Self> {
        Ok(Self {
            timestamp: column_index(column_indices, TIMESTAMP_COLUMN)?,
            target: orbita_indices(column_indices, ORBITA_PREFIXES[0])?,
            present: orbita_indices(column_indices, ORBITA_PREFIXES[1])?,
            present_pos: motor_indices(column_indices, MOTOR_PREFIXES[0])?,
            present_velocity: motor_indices(column_indices, MOTOR_PREFIXES[1])?,
            present_torque: motor_indices(column_indices, MOTOR_PREFIXES[2])?,
            axis_sensor: motor_indices(column_indices, MOTOR_PREFIXES[3])?,
            axis_zeros: motor_indices(column_indices, MOTOR_PREFIXES[4])?,
        })
    }
}

/// All column names a logged response must provide, in schema order.
pub fn required_columns() -> Vec<String> {
    let mut columns = vec![TIMESTAMP_COLUMN.to_string()];
    for prefix in ORBITA_PREFIXES {
        columns.extend(OrbitaAxis::ALL.iter().map(|axis| axis.column(prefix)));
    }
    for prefix in MOTOR_PREFIXES {
        columns.extend(MotorAxis::ALL.iter().map(|axis| axis.log_column(prefix)));
    }
    columns
}

/// Parses one cell, turning anything that is not a number into NaN.
fn parse_f64_or_nan(
    record: &StringRecord,
    index: usize,
    headers: &[String],
    row_index: usize,
) -> f64 {
    let cell = record.get(index).unwrap_or("");
    match cell.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                row = row_index + 1,
                column = %headers[index],
                value = cell,
                "unparseable cell, storing NaN"
            );
            f64::NAN
        }
    }
}

/// Parses a logged bench response from any reader.
///
/// Columns are looked up by name, so their order in the file does not
/// matter and extra columns are ignored. A missing required column is an
/// error; a malformed cell becomes NaN and the row is kept.
pub fn parse_log_reader<R: Read>(reader: R) -> AnalysisResult<Vec<Sample>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
    tracing::debug!("Headers found in CSV: {:?}", headers);

    let mut column_indices: HashMap<String, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        column_indices.insert(header.clone(), i);
    }

    for name in required_columns() {
        let status = if column_indices.contains_key(&name) { "Found" } else { "Not Found" };
        tracing::debug!("  '{}': {}", name, status);
    }

    let layout = ColumnLayout::resolve(&column_indices)?;

    let mut samples: Vec<Sample> = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        let value = |index: usize| parse_f64_or_nan(&record, index, &headers, row_index);
        let orbita =
            |indices: &OrbitaArray<usize>| OrbitaArray::from_fn(|axis| value(indices[axis]));
        let motor = |indices: &MotorArray<usize>| MotorArray::from_fn(|axis| value(indices[axis]));

        samples.push(Sample {
            timestamp: value(layout.timestamp),
            target: orbita(&layout.target),
            present: orbita(&layout.present),
            present_pos: motor(&layout.present_pos),
            present_velocity: motor(&layout.present_velocity),
            present_torque: motor(&layout.present_torque),
            axis_sensor: motor(&layout.axis_sensor),
            axis_zeros: motor(&layout.axis_zeros),
        });
    }

    tracing::debug!("Parsed {} samples", samples.len());
    Ok(samples)
}

/// Parses the logged response CSV at `input_file_path`.
pub fn parse_log_file(input_file_path: &Path) -> AnalysisResult<Vec<Sample>> {
    let file = File::open(input_file_path)?;
    parse_log_reader(BufReader::new(file))
}

/// Estimates the logging rate in Hz from the first and last timestamps.
pub fn estimate_sample_rate(samples: &[Sample]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let total_time = samples[samples.len() - 1].timestamp - samples[0].timestamp;
    if !total_time.is_finite() || total_time <= 0.0 {
        return None;
    }
    Some((samples.len() - 1) as f64 / total_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_line() -> String {
        required_columns().join(",")
    }

    fn row_line(timestamp: f64, pos_bot: &str) -> String {
        required_columns()
            .iter()
            .map(|column| match column.as_str() {
                "timestamp" => timestamp.to_string(),
                "present_pos_bot" => pos_bot.to_string(),
                "axis_zeros_top" => "0.5".to_string(),
                "axis_sensor_mid" => "1.25".to_string(),
                "target_yaw" => "0.3".to_string(),
                _ => "0.0".to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_parses_required_columns_by_name() {
        let csv = format!(
            "{}\n{}\n{}\n",
            header_line(),
            row_line(0.0, "7.0"),
            row_line(0.001, "7.1")
        );
        let samples = parse_log_reader(csv.as_bytes()).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].timestamp, 0.001);
        assert_eq!(samples[0].present_pos[MotorAxis::Bottom], 7.0);
        assert_eq!(samples[1].present_pos[MotorAxis::Bottom], 7.1);
        assert_eq!(samples[0].axis_zeros[MotorAxis::Top], 0.5);
        assert_eq!(samples[0].axis_sensor[MotorAxis::Mid], 1.25);
        assert_eq!(samples[0].target[OrbitaAxis::Yaw], 0.3);
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let headers = required_columns()
            .into_iter()
            .filter(|c| c != "axis_sensor_mid")
            .collect::<Vec<_>>()
            .join(",");
        let csv = format!("{headers}\n");

        match parse_log_reader(csv.as_bytes()) {
            Err(AnalysisError::MissingColumn(name)) => assert_eq!(name, "axis_sensor_mid"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_cell_becomes_nan_without_dropping_row() {
        let csv = format!(
            "{}\n{}\n{}\n",
            header_line(),
            row_line(0.0, "oops"),
            row_line(0.001, "1.0")
        );
        let samples = parse_log_reader(csv.as_bytes()).unwrap();

        assert_eq!(samples.len(), 2);
        assert!(samples[0].present_pos[MotorAxis::Bottom].is_nan());
        assert_eq!(samples[0].present_pos[MotorAxis::Top], 0.0);
        assert_eq!(samples[1].present_pos[MotorAxis::Bottom], 1.0);
    }

    #[test]
    fn test_extra_columns_and_whitespace_are_tolerated() {
        let headers = format!("torque_on, {}, board_state", required_columns().join(", "));
        let row = format!("true, {}, 3", row_line(0.25, "2.0").replace(',', ", "));
        let csv = format!("{headers}\n{row}\n");
        let samples = parse_log_reader(csv.as_bytes()).unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 0.25);
        assert_eq!(samples[0].present_pos[MotorAxis::Bottom], 2.0);
    }

    #[test]
    fn test_estimate_sample_rate() {
        let samples: Vec<Sample> = (0..11)
            .map(|i| Sample {
                timestamp: i as f64 * 0.01,
                ..Default::default()
            })
            .collect();
        let rate = estimate_sample_rate(&samples).unwrap();
        assert!((rate - 100.0).abs() < 1e-9);
        assert_eq!(estimate_sample_rate(&samples[..1]), None);
    }
}

// src/data_input/log_parser.rs
