//! Error types for identity store configuration.
//!
//! The root error type, `Error`, covers argument validation at declaration
//! time and wraps the configuration errors raised while a store
//! configuration is validated and resolved.
//!
//! Nothing in this crate or its dependents logs a failure before returning
//! it; reporting is left to the caller.

use thiserror::Error;

/// Root error type for identity store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was missing, empty, or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The accumulated configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A context initializer failed.
    #[error("Context error: {0}")]
    Context(String),
}

impl Error {
    /// Shorthand for an `InvalidArgument` error naming the offending argument.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error is fatal for the enclosing configuration build.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Errors raised while validating or resolving a store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Validation found an empty supported-types ledger.
    #[error("The store configuration must have at least one supported type")]
    NoSupportedTypes,

    /// A declaration was made after the builder was validated.
    #[error("The store configuration is already validated and accepts no further declarations")]
    AlreadyValidated,

    /// Resolution was requested before validation.
    #[error("The store configuration must be validated before it is resolved")]
    NotValidated,

    /// The multi-store aggregator was built without any store.
    #[error("No identity store configuration was provided")]
    NoStoreConfigured,
}

/// Result type for identity store configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_wraps_into_root() {
        let err: Error = ConfigurationError::NoSupportedTypes.into();
        assert!(err.is_configuration_error());
        assert_eq!(
            err.to_string(),
            "Configuration error: The store configuration must have at least one supported type"
        );
    }

    #[test]
    fn test_invalid_argument_is_not_configuration_error() {
        let err = Error::invalid_argument("types");
        assert!(!err.is_configuration_error());
        assert_eq!(err.to_string(), "Invalid argument: types");
    }
}
