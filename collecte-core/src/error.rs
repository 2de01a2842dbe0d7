use thiserror::Error;

/// Unified error type for Collecte.
#[derive(Error, Debug)]
pub enum CollecteError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CollecteError>;
