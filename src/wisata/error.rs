use thiserror::Error;

#[derive(Error, Debug)]
pub enum WisataError {
    #[error("Attraction not found: {0}")]
    NotFound(String),

    #[error("Attraction already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid filter combination: {0}")]
    InvalidFilterCombination(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WisataError {
    /// Whether the caller may retry the same call later.
    pub fn is_transient(&self) -> bool {
        matches!(self, WisataError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, WisataError>;
