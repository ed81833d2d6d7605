// src/trajectory/profiles.rs

//! Reference trajectories for the bench.
//!
//! Every generator is a pure function of its config: roll and pitch are held
//! at zero and the profile is applied to yaw.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::axis_names::{MotorArray, MotorAxis, OrbitaArray, OrbitaAxis};
use crate::constants::{
    DEFAULT_AMPLITUDE_DEG, DEFAULT_FREQUENCY_HZ, DEFAULT_LIMIT_FRACTION, DEFAULT_PROFILE_DURATION_S,
    DEFAULT_SAMPLE_RATE_HZ, DEFAULT_STEP_TIME_S, RAMP_PEAK_RAD, RAMP_SETTLE_TIME_S,
    RAMP_TICKS_PER_LEG, RAMP_TICK_PERIOD_S,
};

/// One row of a trajectory file, in the column order the bench reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub timestamp: f64,
    pub torque_on: bool,
    pub target_roll: f64,
    pub target_pitch: f64,
    pub target_yaw: f64,
    pub velocity_limit_top: f64,
    pub velocity_limit_middle: f64,
    pub velocity_limit_bottom: f64,
    pub torque_limit_top: f64,
    pub torque_limit_middle: f64,
    pub torque_limit_bottom: f64,
}

impl TrajectoryRow {
    pub fn new(
        timestamp: f64,
        torque_on: bool,
        target: OrbitaArray<f64>,
        limits: &MotorLimits,
    ) -> Self {
        Self {
            timestamp,
            torque_on,
            target_roll: target[OrbitaAxis::Roll],
            target_pitch: target[OrbitaAxis::Pitch],
            target_yaw: target[OrbitaAxis::Yaw],
            velocity_limit_top: limits.velocity[MotorAxis::Top],
            velocity_limit_middle: limits.velocity[MotorAxis::Mid],
            velocity_limit_bottom: limits.velocity[MotorAxis::Bottom],
            torque_limit_top: limits.torque[MotorAxis::Top],
            torque_limit_middle: limits.torque[MotorAxis::Mid],
            torque_limit_bottom: limits.torque[MotorAxis::Bottom],
        }
    }

    /// Row commanding `yaw` with roll and pitch held at zero.
    pub fn yaw_only(timestamp: f64, yaw: f64, torque_on: bool, limits: &MotorLimits) -> Self {
        Self::new(timestamp, torque_on, OrbitaArray([0.0, 0.0, yaw]), limits)
    }
}

/// Per-motor velocity and torque limits, as fractions of the maximum (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorLimits {
    pub velocity: MotorArray<f64>,
    pub torque: MotorArray<f64>,
}

impl Default for MotorLimits {
    fn default() -> Self {
        Self {
            velocity: MotorArray([DEFAULT_LIMIT_FRACTION; 3]),
            torque: MotorArray([DEFAULT_LIMIT_FRACTION; 3]),
        }
    }
}

/// Fixed-rate sampling of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub sample_rate_hz: f64,
    pub duration_s: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            duration_s: DEFAULT_PROFILE_DURATION_S,
        }
    }
}

impl SamplingConfig {
    pub fn sample_count(&self) -> usize {
        (self.duration_s * self.sample_rate_hz).round().max(0.0) as usize
    }

    pub fn timestamp(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate_hz
    }

    pub fn timestamps(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |i| self.timestamp(i))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidConfig {
    pub amplitude_rad: f64,
    pub frequency_hz: f64,
    pub sampling: SamplingConfig,
    pub torque_on: bool,
    pub limits: MotorLimits,
}

impl Default for SinusoidConfig {
    fn default() -> Self {
        Self {
            amplitude_rad: DEFAULT_AMPLITUDE_DEG.to_radians(),
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            sampling: SamplingConfig::default(),
            torque_on: true,
            limits: MotorLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepConfig {
    pub amplitude_rad: f64,
    pub step_time_s: f64,
    pub sampling: SamplingConfig,
    pub torque_on: bool,
    pub limits: MotorLimits,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            amplitude_rad: DEFAULT_AMPLITUDE_DEG.to_radians(),
            step_time_s: DEFAULT_STEP_TIME_S,
            sampling: SamplingConfig::default(),
            torque_on: true,
            limits: MotorLimits::default(),
        }
    }
}

/// Triangle ramp: settle at zero, climb to `peak_rad`, come back down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampConfig {
    pub peak_rad: f64,
    pub ticks_per_leg: usize,
    pub tick_period_s: f64,
    pub settle_time_s: f64,
    pub torque_on: bool,
    pub limits: MotorLimits,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            peak_rad: RAMP_PEAK_RAD,
            ticks_per_leg: RAMP_TICKS_PER_LEG,
            tick_period_s: RAMP_TICK_PERIOD_S,
            settle_time_s: RAMP_SETTLE_TIME_S,
            torque_on: true,
            limits: MotorLimits::default(),
        }
    }
}

impl RampConfig {
    pub fn increment_rad(&self) -> f64 {
        if self.ticks_per_leg == 0 {
            0.0
        } else {
            self.peak_rad / self.ticks_per_leg as f64
        }
    }
}

/// `yaw(t) = A·sin(2πft)`.
pub fn sinusoid_profile(config: &SinusoidConfig) -> Vec<TrajectoryRow> {
    config
        .sampling
        .timestamps()
        .map(|t| {
            let yaw = config.amplitude_rad * (TAU * config.frequency_hz * t).sin();
            TrajectoryRow::yaw_only(t, yaw, config.torque_on, &config.limits)
        })
        .collect()
}

/// Yaw holds 0 before `step_time_s` and the amplitude from then on.
pub fn step_profile(config: &StepConfig) -> Vec<TrajectoryRow> {
    config
        .sampling
        .timestamps()
        .map(|t| {
            let yaw = if t >= config.step_time_s { config.amplitude_rad } else { 0.0 };
            TrajectoryRow::yaw_only(t, yaw, config.torque_on, &config.limits)
        })
        .collect()
}

/// Two settle rows at zero, then `ticks_per_leg` ticks up and as many down.
///
/// The level is tracked as an integer tick count so the last row lands on
/// zero exactly.
pub fn ramp_profile(config: &RampConfig) -> Vec<TrajectoryRow> {
    let increment = config.increment_rad();
    let legs = config.ticks_per_leg;
    let mut rows = Vec::with_capacity(2 + 2 * legs);

    rows.push(TrajectoryRow::yaw_only(0.0, 0.0, config.torque_on, &config.limits));
    rows.push(TrajectoryRow::yaw_only(
        config.settle_time_s,
        0.0,
        config.torque_on,
        &config.limits,
    ));

    for tick in 0..2 * legs {
        let level = if tick < legs { tick + 1 } else { 2 * legs - tick - 1 };
        let t = config.settle_time_s + (tick + 1) as f64 * config.tick_period_s;
        let yaw = increment * level as f64;
        rows.push(TrajectoryRow::yaw_only(t, yaw, config.torque_on, &config.limits));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(rows: &[TrajectoryRow]) -> bool {
        rows.windows(2).all(|w| w[1].timestamp > w[0].timestamp)
    }

    #[test]
    fn test_sinusoid_profile() {
        let config = SinusoidConfig::default();
        let rows = sinusoid_profile(&config);

        assert_eq!(rows.len(), 5000);
        assert_eq!(rows[0].timestamp, 0.0);
        assert_eq!(rows[0].target_yaw, 0.0);
        assert_eq!(rows[250].timestamp, 0.25);
        assert!((rows[250].target_yaw - 20f64.to_radians()).abs() < 1e-12);
        assert!(rows.iter().all(|r| r.target_roll == 0.0 && r.target_pitch == 0.0));
        assert!(rows.iter().all(|r| r.torque_on));
        assert!(strictly_increasing(&rows));
    }

    #[test]
    fn test_sinusoid_amplitude_and_frequency_are_parameters() {
        for (amplitude, frequency) in [(0.1, 2.0), (1.5, 0.5), (3.0, 5.0)] {
            let config = SinusoidConfig {
                amplitude_rad: amplitude,
                frequency_hz: frequency,
                ..Default::default()
            };
            let rows = sinusoid_profile(&config);
            let peak = rows.iter().map(|r| r.target_yaw.abs()).fold(0.0, f64::max);
            assert!((peak - amplitude).abs() < 1e-3 * amplitude, "A={amplitude} f={frequency}");
            let quarter_period =
                (config.sampling.sample_rate_hz / (4.0 * frequency)).round() as usize;
            assert!((rows[quarter_period].target_yaw - amplitude).abs() < 1e-9);
        }
    }

    #[test]
    fn test_step_profile() {
        let config = StepConfig::default();
        let rows = step_profile(&config);

        assert_eq!(rows.len(), 5000);
        for r in &rows {
            let expected = if r.timestamp < 1.0 { 0.0 } else { config.amplitude_rad };
            assert_eq!(r.target_yaw, expected, "t={}", r.timestamp);
        }
        let transitions: Vec<usize> = rows
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0].target_yaw != w[1].target_yaw)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(transitions, vec![1000]);
        assert_eq!(rows[1000].timestamp, 1.0);
    }

    #[test]
    fn test_ramp_profile() {
        let config = RampConfig::default();
        let rows = ramp_profile(&config);

        assert_eq!(rows.len(), 1002);
        assert_eq!((rows[0].timestamp, rows[0].target_yaw), (0.0, 0.0));
        assert_eq!((rows[1].timestamp, rows[1].target_yaw), (0.1, 0.0));
        assert!((rows[501].target_yaw - TAU).abs() < 1e-9);
        assert!(rows[1001].target_yaw.abs() < 1e-9);
        assert!(strictly_increasing(&rows));

        let increment = config.increment_rad();
        for w in rows[1..].windows(2) {
            let step = (w[1].target_yaw - w[0].target_yaw).abs();
            assert!((step - increment).abs() < 1e-9);
        }
    }

    #[test]
    fn test_limits_and_torque_flag_are_carried() {
        let limits = MotorLimits {
            velocity: MotorArray([0.5, 0.6, 0.7]),
            torque: MotorArray([0.2, 0.3, 0.4]),
        };
        let config = StepConfig {
            torque_on: false,
            limits,
            ..Default::default()
        };
        let row = step_profile(&config)[0];

        assert!(!row.torque_on);
        assert_eq!(row.velocity_limit_middle, 0.6);
        assert_eq!(row.torque_limit_bottom, 0.4);

        let default_row = ramp_profile(&RampConfig::default())[0];
        assert_eq!(default_row.velocity_limit_top, 1.0);
        assert_eq!(default_row.torque_limit_middle, 1.0);
    }

    #[test]
    fn test_zero_duration_yields_no_rows() {
        let sampling = SamplingConfig {
            duration_s: 0.0,
            ..Default::default()
        };
        let config = SinusoidConfig {
            sampling,
            ..Default::default()
        };
        assert!(sinusoid_profile(&config).is_empty());
    }
}

// src/trajectory/profiles.rs
