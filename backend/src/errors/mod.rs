//! Global application error types and handlers.
//!
//! This module defines the custom error types used across the backend and
//! provides mechanisms for consistent error handling and response
//! formatting. All errors are terminal per request: nothing here is retried,
//! and internal detail never reaches the response body.

use serde::Serialize;
use thiserror::Error;

/// Field-specific validation error details.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Name of the field that failed validation
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Generic service error used across the authentication flow.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body failed shape validation on a read path (login).
    #[error("malformed request")]
    MalformedRequest { fields: Vec<FieldError> },

    /// Request body failed shape validation on a write path (register).
    #[error("validation failed")]
    ValidationFailed { fields: Vec<FieldError> },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    /// Credential mismatch. Deliberately carries no detail so the response
    /// cannot reveal whether the email exists.
    #[error("Unauthorized")]
    Unauthorized,

    /// Token failed verification: bad signature, malformed, or expired.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn malformed(fields: Vec<FieldError>) -> Self {
        Self::MalformedRequest { fields }
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self::ValidationFailed { fields }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
