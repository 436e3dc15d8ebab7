// src/config/mod.rs

pub mod calculator_config;

// Re-export main types for convenience
pub use calculator_config::CalculatorConfig;
