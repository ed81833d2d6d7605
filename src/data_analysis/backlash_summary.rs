// src/data_analysis/backlash_summary.rs

use ndarray_stats::QuantileExt;

use crate::data_analysis::angle_reconciliation::AxisReconciliation;

/// Extremes and average magnitude of one axis' backlash series, in radians.
/// Descriptive only, no model is fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacklashSummary {
    pub min: f64,
    pub max: f64,
    pub peak_to_peak: f64,
    pub mean_abs: f64,
    pub nan_count: usize,
}

/// Summarizes the finite part of an axis' backlash series.
///
/// Returns `None` if the series has no finite sample.
pub fn summarize_backlash(axis: &AxisReconciliation) -> Option<BacklashSummary> {
    let backlash = &axis.backlash;
    let finite: Vec<f64> = backlash.iter().copied().filter(|e| e.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }

    let min = *backlash.min_skipnan();
    let max = *backlash.max_skipnan();
    let mean_abs = finite.iter().map(|e| e.abs()).sum::<f64>() / finite.len() as f64;

    Some(BacklashSummary {
        min,
        max,
        peak_to_peak: max - min,
        mean_abs,
        nan_count: backlash.iter().filter(|e| e.is_nan()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn axis_with(backlash: Array1<f64>) -> AxisReconciliation {
        let n = backlash.len();
        AxisReconciliation {
            axis_zero: 0.0,
            sensor_corrected: Array1::zeros(n),
            motor_derived: Array1::zeros(n),
            backlash,
        }
    }

    #[test]
    fn test_summary_skips_nan() {
        let summary = summarize_backlash(&axis_with(array![0.01, f64::NAN, -0.03, 0.02])).unwrap();
        assert_eq!(summary.min, -0.03);
        assert_eq!(summary.max, 0.02);
        assert!((summary.peak_to_peak - 0.05).abs() < 1e-12);
        assert!((summary.mean_abs - 0.02).abs() < 1e-12);
        assert_eq!(summary.nan_count, 1);
    }

    #[test]
    fn test_summary_of_unusable_series() {
        assert_eq!(summarize_backlash(&axis_with(array![f64::NAN, f64::NAN])), None);
        assert_eq!(summarize_backlash(&axis_with(Array1::zeros(0))), None);
    }
}

// src/data_analysis/backlash_summary.rs
