//! Error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Selector for {0} must not be empty")]
    EmptySelector(&'static str),

    #[error("Flag for {0} must be a single non-empty class name")]
    InvalidFlag(&'static str),

    #[error("Threshold {0} is outside [0, 1]")]
    Threshold(f64),

    #[error("Invalid root margin {0:?}")]
    RootMargin(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObserveError {
    #[error("Visibility observation unsupported: {0}")]
    Unsupported(String),

    #[error("Host rejected observer: {0}")]
    Rejected(String),

    #[error("Observer is already watching an element")]
    AlreadyRegistered,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToggleError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to observe title: {0}")]
    Observe(#[from] ObserveError),
}
