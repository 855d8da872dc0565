//! Configuration system for the tracelink console output customizer.
//!
//! This crate provides configuration loading, validation, and default values
//! for the engine. It includes:
//!
//! - The ordered customizer list (which ecosystems are recognized, in which order)
//! - Anchor payload settings (scheme and navigation call names)
//! - Log level for the debug log file

pub mod config;
mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{AnchorConfig, CustomizerToggle, LogLevel, default_customizers};
