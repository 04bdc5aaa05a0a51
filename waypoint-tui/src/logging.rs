//! File-backed tracing setup.
//!
//! The terminal is owned by the UI, so logs go to a file. Filtering follows
//! `RUST_LOG` when set, defaulting to `info`.

use crate::error::TuiError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init(log_path: &Path) -> Result<(), TuiError> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;
    Ok(())
}
