// src/data_analysis/mod.rs

pub mod angle_reconciliation;
pub mod backlash_summary;

// src/data_analysis/mod.rs
