//! Unified application error type.
//! All modules (store, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Data file
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No record with id {0}")]
    RecordNotFound(u64),

    #[error("Record #{id} has CPF/CNPJ '{found}', expected '{expected}'; list the records again")]
    TaxIdMismatch {
        id: u64,
        expected: String,
        found: String,
    },

    #[error("Position {position} is out of range (table has {len} rows)")]
    PositionOutOfRange { position: usize, len: usize },

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid process type: {0}")]
    InvalidProcessType(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
