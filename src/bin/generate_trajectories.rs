// src/bin/generate_trajectories.rs

use std::env;
use std::error::Error;
use std::path::PathBuf;

use orbita3d_backlash::constants::{RAMP_OUTPUT_FILE, SINUSOID_OUTPUT_FILE, STEP_OUTPUT_FILE};
use orbita3d_backlash::trajectory::profiles::{
    ramp_profile, sinusoid_profile, step_profile, RampConfig, SinusoidConfig, StepConfig,
};
use orbita3d_backlash::trajectory::writer::write_trajectory_file;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Error: Invalid number of arguments");
        eprintln!("Usage: {} [output_dir]", args[0]);
        std::process::exit(1);
    }
    let output_dir = args.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let sinusoid = SinusoidConfig::default();
    let step = StepConfig::default();
    let ramp = RampConfig::default();

    println!(
        "Sinusoid: {:.1} deg at {} Hz, {} rows",
        sinusoid.amplitude_rad.to_degrees(),
        sinusoid.frequency_hz,
        sinusoid.sampling.sample_count()
    );
    write_trajectory_file(&output_dir.join(SINUSOID_OUTPUT_FILE), &sinusoid_profile(&sinusoid))?;

    println!(
        "Step: {:.1} deg from t = {} s, {} rows",
        step.amplitude_rad.to_degrees(),
        step.step_time_s,
        step.sampling.sample_count()
    );
    write_trajectory_file(&output_dir.join(STEP_OUTPUT_FILE), &step_profile(&step))?;

    let ramp_rows = ramp_profile(&ramp);
    println!(
        "Ramp: 0 -> {:.1} deg -> 0 in {} ticks of {} s, {} rows",
        ramp.peak_rad.to_degrees(),
        2 * ramp.ticks_per_leg,
        ramp.tick_period_s,
        ramp_rows.len()
    );
    write_trajectory_file(&output_dir.join(RAMP_OUTPUT_FILE), &ramp_rows)?;

    println!("Trajectories written to '{}'.", output_dir.display());
    Ok(())
}

// src/bin/generate_trajectories.rs
