//! Typed error variants for the asciimesh-config crate.

use thiserror::Error;

/// Errors that can occur when loading, saving or validating configuration.
///
/// `Config::load` and friends return `Result<_, ConfigError>`; application code
/// using `anyhow` gets the conversion for free through `std::error::Error`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
