//! Errors raised by the file and configuration shell.
//!
//! The calculation core never fails; only reading inputs and writing
//! reports can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MhsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, MhsError>;
