//! Unified application error type.
//! All modules (store, core, cli, export) return AppError so the caller
//! can match on the exact condition and render a specific message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Event title must not be empty")]
    MissingTitle,

    #[error("Day name must not be empty")]
    MissingName,

    // ---------------------------
    // Schedule errors
    // ---------------------------
    #[error("A schedule holds at most {0} days")]
    DayLimitExceeded(usize),

    #[error("No schedule day with id {0}")]
    DayNotFound(i64),

    #[error("No event with id {0}")]
    EventNotFound(i64),

    // ---------------------------
    // Data file errors
    // ---------------------------
    #[error("Data file error: {0}")]
    Data(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
