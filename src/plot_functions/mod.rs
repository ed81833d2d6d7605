// src/plot_functions/mod.rs

pub mod plot_axis_angles;
pub mod plot_backlash;
pub mod plot_motor_channels;
pub mod plot_orbita_position;

// src/plot_functions/mod.rs
