use cryptowall_cipher::CipherError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WallError>;

#[derive(Debug, Error)]
pub enum WallError {
    #[error("Message text must not be empty")]
    EmptyPlaintext,

    #[error("Message text too long: max {max} characters, got {got}")]
    PlaintextTooLong { max: usize, got: usize },

    #[error("Message not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("SQLite error: {0}")]
    Sqlite(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Random number generation failed: {0}")]
    Rng(String),
}
