//! Unified application error type.
//! Clock, logbook, config and the terminal session all return AppError so
//! the dispatcher can report recoverable failures and keep going.

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

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Invalid roster file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Roster
    // ---------------------------
    #[error("Default roster file is missing: {}. Aborting.", .0.display())]
    DefaultRosterMissing(PathBuf),

    // ---------------------------
    // Radio log
    // ---------------------------
    #[error("Log file not found: {}", .0.display())]
    LogNotFound(PathBuf),

    #[error("Cannot log an empty message")]
    EmptyMessage,

    // ---------------------------
    // Clock
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Clock error: {0}")]
    Clock(String),
}

pub type AppResult<T> = Result<T, AppError>;
