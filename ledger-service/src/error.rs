use crate::models::TransactionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
