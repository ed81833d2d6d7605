// src/trajectory/mod.rs

pub mod profiles;
pub mod writer;

// src/trajectory/mod.rs
