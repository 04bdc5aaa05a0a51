//! Top-level error type for the TUI binary.

use crate::config::ConfigError;
use crate::errors::AppError;
use crate::persistence::PersistenceError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] AppError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
