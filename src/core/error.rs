//! Error types for the lognormal model and option pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Coarse error category, for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DataFetch,
    DataIntegrity,
    Computation,
    InvalidInput,
    Io,
    Serialization,
}

impl ModelError {
    pub fn data_fetch(msg: impl Into<String>) -> Self {
        Self::DataFetch(msg.into())
    }

    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }

    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DataFetch(_) => ErrorKind::DataFetch,
            Self::DataIntegrity(_) => ErrorKind::DataIntegrity,
            Self::Computation(_) => ErrorKind::Computation,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Io(_) => ErrorKind::Io,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
