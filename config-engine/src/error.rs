use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] figment::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("No platform data directory available; set storage.path")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
