//! Tracing subscriber initialization.
//!
//! The UI owns the terminal, so logs go to a file. Follow them with
//! `tail -f` from another terminal.

use crate::state::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// `$HOME/.momentum/momentum.log`
pub fn default_log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".momentum").join("momentum.log")
}

/// Install a file-backed subscriber. Honors `RUST_LOG`, default `info`.
///
/// The log directory is created first, so it exists even when a subscriber
/// was already installed.
pub fn init(log_path: &Path) -> AppResult<()> {
    use tracing_subscriber::EnvFilter;

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Config(format!("invalid log file path: {:?}", log_path)))?;
    let directory = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| AppError::Config("tracing subscriber already initialized".to_string()))
}
