use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed persisted state: {0}")]
    StateParse(#[from] serde_json::Error),

    #[error("Invalid persisted state shape: {message}")]
    StateShape { message: String },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
