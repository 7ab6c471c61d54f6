//! Configuration loading errors.

use thiserror::Error;

/// Error loading or parsing a configuration file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
