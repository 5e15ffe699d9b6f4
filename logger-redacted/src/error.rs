use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log level or filter: {0}")]
    InvalidFilter(String),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
