//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Ownership and existence checks short-circuit with the specific kind
/// before any mutation reaches the store; everything unexpected surfaces
/// as `Internal`.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Referenced resource does not exist
    #[error("{resource} not found!")]
    NotFound { resource: String },

    /// Authenticated caller is not the resource owner
    #[error("{message}")]
    Forbidden { message: String },

    /// Malformed or policy-violating payload
    #[error("{message}")]
    Validation { message: String },

    /// Duplicate unique field (username, email)
    #[error("{message}")]
    Conflict { message: String },

    /// Unexpected store or infrastructure failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Not-found error for a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Forbidden error with a caller-facing message
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Validation error with a caller-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Conflict error for duplicate unique fields
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Internal error wrapping an infrastructure failure message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
