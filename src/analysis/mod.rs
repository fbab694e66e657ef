// src/analysis/mod.rs
pub mod aggregate;
pub mod stats;

// Re-export commonly used types
pub use aggregate::{aggregate, compute_filtered_rows, OutcomeCounts};
