use cookbooks_core::storage::RepositoryError;
use thiserror::Error;

/// Errors surfaced by a handler operation.
///
/// Validation failures are raised before any store call is attempted, so a
/// caller can always tell a bad event apart from a store failure.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Invalid event payload: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HandlerError {
    /// Returns true if this is a validation error (bad event payload).
    pub fn is_validation(&self) -> bool {
        matches!(self, HandlerError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let error = HandlerError::Validation("missing field `name`".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid event payload: missing field `name`"
        );
        assert!(error.is_validation());
    }

    #[test]
    fn test_repository_error_passes_through_unchanged() {
        let inner = RepositoryError::QueryFailed("throttled".to_string());
        let error = HandlerError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
        assert!(!error.is_validation());
    }
}
