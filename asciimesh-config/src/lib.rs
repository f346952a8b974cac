//! Configuration system for the asciimesh text geometry generator.
//!
//! This crate provides configuration loading, saving, validation and default
//! values. It includes:
//!
//! - The [`Config`] struct with per-field serde defaults
//! - YAML persistence under the platform config directory
//! - Style enums shared by the render crate ([`OutlineMode`], [`RenderMode`])

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{OutlineMode, RenderMode};
