//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Expected, caller-actionable failures of the interval engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// A caller-supplied value violates a precondition.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An insert would duplicate an entity that must be unique.
    #[error("not unique: {0}")]
    NotUniqueEntity(String),

    /// The operation references an entity that does not exist.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = VocabError::InvalidParameter("interval must be >= 1, got 0".to_string());
        assert_eq!(error.to_string(), "invalid parameter: interval must be >= 1, got 0");

        let error = VocabError::NotUniqueEntity("interval 3 for user 1".to_string());
        assert_eq!(error.to_string(), "not unique: interval 3 for user 1");

        let error = VocabError::UnknownEntity("user 42".to_string());
        assert_eq!(error.to_string(), "unknown entity: user 42");
    }
}
