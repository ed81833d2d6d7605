// src/lib.rs - Library interface for the analysis and trajectory binaries

pub mod axis_names;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;
pub mod trajectory;
pub mod types;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
