// src/trajectory/writer.rs

use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::axis_names::{MotorAxis, OrbitaAxis};
use crate::error::AnalysisResult;
use crate::trajectory::profiles::TrajectoryRow;

/// Column names of a trajectory file, in the order they are written.
pub fn trajectory_columns() -> Vec<String> {
    let mut columns = vec!["timestamp".to_string(), "torque_on".to_string()];
    columns.extend(OrbitaAxis::ALL.iter().map(|axis| axis.column("target")));
    for prefix in ["velocity_limit", "torque_limit"] {
        columns.extend(MotorAxis::ALL.iter().map(|axis| axis.limit_column(prefix)));
    }
    columns
}

/// Writes `rows` as CSV, header first.
pub fn write_trajectory_csv<W: Write>(writer: W, rows: &[TrajectoryRow]) -> AnalysisResult<()> {
    let mut wtr = Writer::from_writer(writer);
    if rows.is_empty() {
        wtr.write_record(&trajectory_columns())?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` to a new or truncated file at `path`.
pub fn write_trajectory_file(path: &Path, rows: &[TrajectoryRow]) -> AnalysisResult<()> {
    let file = File::create(path)?;
    write_trajectory_csv(BufWriter::new(file), rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "trajectory written");
    Ok(())
}


// src/trajectory/writer.rs
