//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;
