//! Unified application error type.
//! All modules (ledger, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot access file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Backup to {} failed: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{0}', expected DD.MM.YYYY HH:MM")]
    TimestampFormat(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
