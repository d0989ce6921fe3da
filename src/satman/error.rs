use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatError {
    #[error("Invalid {0}")]
    Validation(#[from] ValidationError),

    #[error("A record for '{0}' already exists")]
    DuplicateName(String),

    #[error("Candidate '{name}' not found")]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl SatError {
    /// True for failures of the save/load path, as opposed to bad input.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            SatError::Io(_) | SatError::Serialization(_) | SatError::Store(_)
        )
    }

    /// Close matches collected when a lookup missed.
    pub fn suggestions(&self) -> &[String] {
        match self {
            SatError::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, SatError>;
