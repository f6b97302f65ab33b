// src/lib.rs

pub mod config;
pub mod core;
pub mod telemetry;

// Re-export
pub use crate::core::client::{ListClient, Run};
