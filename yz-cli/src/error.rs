//! CLI 错误类型

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use yz_core::mode::RegistryError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level '{0}' (expected silent, error, warn, info, debug or trace)")]
    LogLevel(String),

    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
