// src/data_analysis/angle_reconciliation.rs

//! Reconciles motor shaft angles against the absolute axis sensors.
//!
//! Both readings are brought into the same single-turn frame relative to the
//! calibration zero of the axis, and their difference is folded across the
//! 0/2π seam into a signed backlash estimate.
//!
//! The fold assumes the true backlash is well under π. A discrepancy larger
//! than half a turn is indistinguishable from a smaller one of opposite sign
//! and will be reported as the latter.

use ndarray::{Array1, Zip};
use std::f64::consts::{PI, TAU};

use crate::axis_names::{MotorArray, MotorAxis};
use crate::constants::AXIS_ZERO_TOLERANCE_RAD;
use crate::data_input::log_data::Sample;
use crate::error::{AnalysisError, AnalysisResult};

/// Reduces any angle to its representative in [0, 2π).
///
/// NaN is passed through.
pub fn wrap_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid of a tiny negative angle rounds up to exactly TAU.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Folds an angle difference onto the shortest signed path, in (−π, π].
///
/// Differences already in range are returned untouched. Anything else is
/// corrected by a sign-aware multiple of 2π; exactly −π is reported as +π.
pub fn fold_angle_error(error: f64) -> f64 {
    if error > -PI && error <= PI {
        return error;
    }
    let wrapped = wrap_angle(error);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Absolute sensor reading relative to the calibration pose, in [0, 2π).
pub fn sensor_axis_angle(axis_sensor_raw: f64, axis_zero: f64) -> f64 {
    wrap_angle(axis_sensor_raw - axis_zero)
}

/// Multi-turn motor position reduced to one turn and taken relative to the
/// calibration pose, in [0, 2π).
pub fn motor_axis_angle(present_pos_raw: f64, axis_zero: f64) -> f64 {
    wrap_angle(present_pos_raw.rem_euclid(TAU) - axis_zero)
}

/// Signed discrepancy between the motor-derived and the sensed axis angle.
pub fn backlash_error(axis_from_motor: f64, axis_sensor_corrected: f64) -> f64 {
    fold_angle_error(axis_from_motor - axis_sensor_corrected)
}

/// Reconciled angles of one axis, sample-aligned with the log.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisReconciliation {
    pub axis_zero: f64,
    pub sensor_corrected: Array1<f64>,
    pub motor_derived: Array1<f64>,
    pub backlash: Array1<f64>,
}

/// Reconciled angles of every axis of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BacklashSeries {
    pub timestamps: Array1<f64>,
    pub axes: MotorArray<AxisReconciliation>,
}

impl BacklashSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Reconciles one axis from its motor positions, sensor readings and zero.
///
/// `present_pos` and `axis_sensor` must be sample-aligned; a length mismatch
/// is returned as an error rather than truncated.
pub fn reconcile_axis(
    present_pos: &[f64],
    axis_sensor: &[f64],
    axis_zero: f64,
) -> AnalysisResult<AxisReconciliation> {
    if present_pos.len() != axis_sensor.len() {
        return Err(AnalysisError::LengthMismatch {
            what: "axis_sensor",
            expected: present_pos.len(),
            actual: axis_sensor.len(),
        });
    }

    let sensor_corrected: Array1<f64> = axis_sensor
        .iter()
        .map(|&raw| sensor_axis_angle(raw, axis_zero))
        .collect();
    let motor_derived: Array1<f64> = present_pos
        .iter()
        .map(|&raw| motor_axis_angle(raw, axis_zero))
        .collect();
    let backlash = Zip::from(&motor_derived)
        .and(&sensor_corrected)
        .map_collect(|&motor, &sensor| backlash_error(motor, sensor));

    Ok(AxisReconciliation {
        axis_zero,
        sensor_corrected,
        motor_derived,
        backlash,
    })
}

/// Calibration zero of `axis` for the run, taken from the first sample whose
/// zero cell is finite.
///
/// The zero is captured once per run; rows that disagree are only reported.
/// A malformed cell therefore only invalidates its own sample. If no row
/// carries a finite zero the axis is returned as NaN and reported.
pub fn calibration_zero(samples: &[Sample], axis: MotorAxis) -> AnalysisResult<f64> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyLog);
    }
    let Some(zero) = samples
        .iter()
        .map(|s| s.axis_zeros[axis])
        .find(|z| z.is_finite())
    else {
        tracing::warn!(
            axis = axis.display_name(),
            "no finite calibration zero in the log, axis left unreconciled"
        );
        return Ok(f64::NAN);
    };

    let drifting = zero_drift_count(samples, axis, zero);
    if drifting > 0 {
        tracing::warn!(
            axis = axis.display_name(),
            zero,
            drifting,
            "calibration zero is not constant over the run, using the first finite row"
        );
    }
    Ok(zero)
}

/// Number of samples whose zero is NaN or differs from `zero` by more than
/// the tolerance.
fn zero_drift_count(samples: &[Sample], axis: MotorAxis, zero: f64) -> usize {
    samples
        .iter()
        .filter(|s| {
            let offset = (s.axis_zeros[axis] - zero).abs();
            offset.is_nan() || offset > AXIS_ZERO_TOLERANCE_RAD
        })
        .count()
}

/// Reconciles every axis of a logged run.
pub fn reconcile_samples(samples: &[Sample]) -> AnalysisResult<BacklashSeries> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyLog);
    }

    let timestamps: Array1<f64> = samples.iter().map(|s| s.timestamp).collect();

    let reconcile = |axis: MotorAxis| -> AnalysisResult<AxisReconciliation> {
        let axis_zero = calibration_zero(samples, axis)?;
        let present_pos: Vec<f64> = samples.iter().map(|s| s.present_pos[axis]).collect();
        let axis_sensor: Vec<f64> = samples.iter().map(|s| s.axis_sensor[axis]).collect();
        let result = reconcile_axis(&present_pos, &axis_sensor, axis_zero)?;
        tracing::debug!(
            axis = axis.display_name(),
            axis_zero,
            samples = result.backlash.len(),
            "axis reconciled"
        );
        Ok(result)
    };

    let axes = MotorArray([
        reconcile(MotorAxis::Top)?,
        reconcile(MotorAxis::Mid)?,
        reconcile(MotorAxis::Bottom)?,
    ]);

    Ok(BacklashSeries { timestamps, axes })
}


// src/data_analysis/angle_reconciliation.rs
