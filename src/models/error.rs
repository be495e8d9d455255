use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, OracleError>;
