//! Unified application error type.
//! Every layer (db, core, cli, utils) returns AppError so failures reach
//! `main` through a single path and are reported the same way.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation (no state change)
    // ---------------------------
    #[error("Please enter an Account ID")]
    MissingAccountId,

    #[error("Please add at least one task")]
    NoTaskEntries,

    #[error("Unknown task type: {0}")]
    UnknownTaskType(String),

    #[error("Invalid task entry '{0}': expected NAME=COUNT")]
    InvalidTaskSpec(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
