use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger boundary failures.
///
/// The aggregation and geometry engines never return these; they are raised
/// where user input enters the ledger and where the ledger is exported.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    #[error("Target must be a non-negative number, got {0}")]
    InvalidTarget(f64),
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
