//! `WebAuthn` error types
//!
//! This module defines the error taxonomy for building registration options.

/// Errors raised while encoding, constructing or assembling registration options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebAuthnError {
    /// Text could not be decoded as unpadded base64url
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A required descriptor field was empty
    #[error("Invalid entity: `{field}` must not be empty")]
    InvalidEntity { field: &'static str },

    /// An assembler precondition failed
    #[error("Validation error: `{field}` must not be empty")]
    Validation { field: &'static str },

    /// Settings could not be loaded or are unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Other internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WebAuthnError {
    /// Name of the offending field for entity and validation errors
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidEntity { field } | Self::Validation { field } => Some(*field),
            Self::MalformedEncoding(_)
            | Self::ConfigurationError(_)
            | Self::InternalError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_reported() {
        let err = WebAuthnError::Validation { field: "domain" };
        assert_eq!(err.field(), Some("domain"));
        assert_eq!(err.to_string(), "Validation error: `domain` must not be empty");

        let err = WebAuthnError::MalformedEncoding("bad".to_string());
        assert_eq!(err.field(), None);
    }
}
