// src/axis_names.rs

//! Centralized axis naming and per-axis containers.
//!
//! The bench logs two axis taxonomies side by side: the three motors of the
//! actuator (`_top`, `_mid`, `_bot` columns) and the three orbita axes
//! (`_roll`, `_pitch`, `_yaw` columns). Both are indexed by enums here so a
//! value can never be looked up on the wrong axis by a stray integer.

use std::ops::{Index, IndexMut};

/// Number of axes in each taxonomy.
pub const AXIS_COUNT: usize = 3;

/// One of the three motors driving the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorAxis {
    Top,
    Mid,
    Bottom,
}

/// One of the three logical rotational degrees of freedom of the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitaAxis {
    Roll,
    Pitch,
    Yaw,
}

impl MotorAxis {
    pub const ALL: [MotorAxis; AXIS_COUNT] = [MotorAxis::Top, MotorAxis::Mid, MotorAxis::Bottom];

    pub const fn index(self) -> usize {
        match self {
            MotorAxis::Top => 0,
            MotorAxis::Mid => 1,
            MotorAxis::Bottom => 2,
        }
    }

    /// Suffix used by the logged response columns (`present_pos_bot`, ...).
    pub const fn log_suffix(self) -> &'static str {
        match self {
            MotorAxis::Top => "top",
            MotorAxis::Mid => "mid",
            MotorAxis::Bottom => "bot",
        }
    }

    /// Suffix used by the trajectory limit columns (`torque_limit_middle`, ...).
    pub const fn limit_suffix(self) -> &'static str {
        match self {
            MotorAxis::Top => "top",
            MotorAxis::Mid => "middle",
            MotorAxis::Bottom => "bottom",
        }
    }

    /// Trajectory limit column for this motor, e.g. `torque_limit_middle`.
    pub fn limit_column(self, prefix: &str) -> String {
        format!("{prefix}_{}", self.limit_suffix())
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            MotorAxis::Top => "Top",
            MotorAxis::Mid => "Mid",
            MotorAxis::Bottom => "Bot",
        }
    }

    /// The orbita axis sharing this motor's position in the logged arrays.
    pub const fn orbita_axis(self) -> OrbitaAxis {
        match self {
            MotorAxis::Top => OrbitaAxis::Roll,
            MotorAxis::Mid => OrbitaAxis::Pitch,
            MotorAxis::Bottom => OrbitaAxis::Yaw,
        }
    }

    /// Builds the full column name for a logged per-motor channel.
    pub fn log_column(self, prefix: &str) -> String {
        format!("{prefix}_{}", self.log_suffix())
    }
}

impl OrbitaAxis {
    pub const ALL: [OrbitaAxis; AXIS_COUNT] =
        [OrbitaAxis::Roll, OrbitaAxis::Pitch, OrbitaAxis::Yaw];

    pub const fn index(self) -> usize {
        match self {
            OrbitaAxis::Roll => 0,
            OrbitaAxis::Pitch => 1,
            OrbitaAxis::Yaw => 2,
        }
    }

    pub const fn column_suffix(self) -> &'static str {
        match self {
            OrbitaAxis::Roll => "roll",
            OrbitaAxis::Pitch => "pitch",
            OrbitaAxis::Yaw => "yaw",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            OrbitaAxis::Roll => "Roll",
            OrbitaAxis::Pitch => "Pitch",
            OrbitaAxis::Yaw => "Yaw",
        }
    }

    pub const fn motor_axis(self) -> MotorAxis {
        match self {
            OrbitaAxis::Roll => MotorAxis::Top,
            OrbitaAxis::Pitch => MotorAxis::Mid,
            OrbitaAxis::Yaw => MotorAxis::Bottom,
        }
    }

    pub fn column(self, prefix: &str) -> String {
        format!("{prefix}_{}", self.column_suffix())
    }
}

// The ALL arrays must list each axis at its own index, and the two
// taxonomies must map onto each other one to one.
const _: () = {
    let mut i = 0;
    while i < AXIS_COUNT {
        assert!(MotorAxis::ALL[i].index() == i);
        assert!(OrbitaAxis::ALL[i].index() == i);
        assert!(MotorAxis::ALL[i].orbita_axis().motor_axis().index() == i);
        i += 1;
    }
};

/// Display names of the orbita axes, in positional order.
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["Roll", "Pitch", "Yaw"];

/// Display names of the motors, in positional order.
pub const MOTOR_NAMES: [&str; AXIS_COUNT] = ["Top", "Mid", "Bot"];

/// One value per motor, indexed by [`MotorAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorArray<T>(pub [T; AXIS_COUNT]);

/// One value per orbita axis, indexed by [`OrbitaAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitaArray<T>(pub [T; AXIS_COUNT]);

impl<T> MotorArray<T> {
    pub fn from_fn(mut f: impl FnMut(MotorAxis) -> T) -> Self {
        let [a, b, c] = MotorAxis::ALL;
        MotorArray([f(a), f(b), f(c)])
    }
}

impl<T> OrbitaArray<T> {
    pub fn from_fn(mut f: impl FnMut(OrbitaAxis) -> T) -> Self {
        let [a, b, c] = OrbitaAxis::ALL;
        OrbitaArray([f(a), f(b), f(c)])
    }
}

impl<T> Index<MotorAxis> for MotorArray<T> {
    type Output = T;
    fn index(&self, axis: MotorAxis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<MotorAxis> for MotorArray<T> {
    fn index_mut(&mut self, axis: MotorAxis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

impl<T> Index<OrbitaAxis> for OrbitaArray<T> {
    type Output = T;
    fn index(&self, axis: OrbitaAxis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<OrbitaAxis> for OrbitaArray<T> {
    fn index_mut(&mut self, axis: OrbitaAxis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_names_constant() {
        for axis in OrbitaAxis::ALL {
            assert_eq!(AXIS_NAMES[axis.index()], axis.display_name());
        }
        for axis in MotorAxis::ALL {
            assert_eq!(MOTOR_NAMES[axis.index()], axis.display_name());
        }
    }

    #[test]
    fn test_motor_orbita_mapping_is_bijective() {
        for axis in MotorAxis::ALL {
            assert_eq!(axis.orbita_axis().motor_axis(), axis);
        }
        assert_eq!(MotorAxis::Bottom.orbita_axis(), OrbitaAxis::Yaw);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(MotorAxis::Bottom.log_column("present_pos"), "present_pos_bot");
        assert_eq!(MotorAxis::Mid.log_column("axis_zeros"), "axis_zeros_mid");
        assert_eq!(MotorAxis::Mid.limit_column("torque_limit"), "torque_limit_middle");
        assert_eq!(OrbitaAxis::Pitch.column("target"), "target_pitch");
    }

    #[test]
    fn test_typed_indexing() {
        let mut values = MotorArray::from_fn(|axis| axis.index() as f64 * 10.0);
        assert_eq!(values[MotorAxis::Mid], 10.0);
        values[MotorAxis::Bottom] = -1.0;
        assert_eq!(values.0, [0.0, 10.0, -1.0]);

        let rpy = OrbitaArray([0.1, 0.2, 0.3]);
        assert_eq!(rpy[OrbitaAxis::Yaw], 0.3);
        let from_fn = OrbitaArray::from_fn(|axis| (axis.index() + 1) as f64 * 0.1);
        assert_eq!(from_fn[OrbitaAxis::Pitch], 0.2);
    }
}
