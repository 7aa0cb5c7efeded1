//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// A field-level validation failure.
///
/// The single failure kind of this domain layer. Every rule produces a
/// human-readable message of the form `"<Field> should <constraint>"`, and
/// `Display` is exactly that message so callers can surface it verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = ValidationError::new("Name should not be null or empty");
        assert_eq!(err.to_string(), "Name should not be null or empty");
        assert_eq!(err.message(), "Name should not be null or empty");
    }

    #[test]
    fn equality_is_by_message() {
        let a = ValidationError::new("Name should have at least 3 characters");
        let b = ValidationError::new("Name should have at least 3 characters");
        assert_eq!(a, b);
    }
}
