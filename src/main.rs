// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use orbita3d_backlash::axis_names::MotorAxis;
use orbita3d_backlash::data_analysis::angle_reconciliation::reconcile_samples;
use orbita3d_backlash::data_analysis::backlash_summary::summarize_backlash;
use orbita3d_backlash::data_input::log_parser::{estimate_sample_rate, parse_log_file};
use orbita3d_backlash::plot_functions::plot_axis_angles::plot_axis_angles;
use orbita3d_backlash::plot_functions::plot_backlash::plot_backlash;
use orbita3d_backlash::plot_functions::plot_motor_channels::{
    plot_motor_position, plot_motor_torque, plot_motor_velocity,
};
use orbita3d_backlash::plot_functions::plot_orbita_position::plot_orbita_position;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Error: Invalid number of arguments");
        eprintln!("Usage: {} <file_name.csv>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    tracing::info!(
        version = orbita3d_backlash::crate_version(),
        input = %input_path.display(),
        "analysing bench log"
    );

    // --- Data Reading ---
    let samples = parse_log_file(input_path)?;
    println!("Finished reading {} data rows.", samples.len());
    match estimate_sample_rate(&samples) {
        Some(rate) => println!("Estimated Sample Rate: {rate:.2} Hz"),
        None => println!(
            "Warning: Could not determine sample rate (need >= 2 rows with distinct timestamps)."
        ),
    }

    // --- Angle Reconciliation ---
    // Computed in full before anything is rendered.
    let backlash = reconcile_samples(&samples)?;

    println!("\n--- Backlash Summary ---");
    for axis in MotorAxis::ALL {
        let reconciled = &backlash.axes[axis];
        match summarize_backlash(reconciled) {
            Some(summary) => {
                let nan_note = if summary.nan_count > 0 {
                    format!(" ({} NaN samples)", summary.nan_count)
                } else {
                    String::new()
                };
                println!(
                    "  {:<4} zero {:>8.3} deg | min {:>7.3} deg | max {:>7.3} deg | \
                     p-p {:>7.3} deg | mean |e| {:>7.3} deg{nan_note}",
                    axis.display_name(),
                    reconciled.axis_zero.to_degrees(),
                    summary.min.to_degrees(),
                    summary.max.to_degrees(),
                    summary.peak_to_peak.to_degrees(),
                    summary.mean_abs.to_degrees(),
                );
            }
            None => println!("  {:<4} no finite backlash samples", axis.display_name()),
        }
    }

    // --- Plots ---
    println!("\n--- Generating Motor Variable Plots ---");
    plot_motor_position(&samples, &root_name)?;
    plot_motor_velocity(&samples, &root_name)?;
    plot_motor_torque(&samples, &root_name)?;

    println!("\n--- Generating Orbita Position and Backlash Plots ---");
    plot_orbita_position(&samples, &root_name)?;
    plot_axis_angles(&backlash, &root_name)?;
    plot_backlash(&backlash, &root_name)?;

    Ok(())
}

// src/main.rs
