//! Error types for tollgate

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// A pricing policy was given a negative rate or fixed amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A parking was given a negative slot maximum
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    /// A stay interval is missing an end or runs backwards
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The ticket is not active in this parking
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Unknown vehicle category: {0}")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation script error: {0}")]
    Script(String),

    #[error("Parking state lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
