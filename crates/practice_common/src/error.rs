// --- File: crates/practice_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all practice crates.
///
/// Crate-local errors (database, mail) convert into this at the boundary
/// where they become user-visible.
#[derive(Error, Debug)]
pub enum PracticeError {
    /// A required booking field was missing or a value was malformed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The admin password did not match
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// No appointment with the given id
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The requested date is full or the slot is taken
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PracticeError {
    fn status_code(&self) -> u16 {
        match self {
            PracticeError::ValidationError(_) => 400,
            PracticeError::AuthError(_) => 401,
            PracticeError::NotFoundError(_) => 404,
            PracticeError::ConflictError(_) => 409,
            PracticeError::DatabaseError(_) => 500,
            PracticeError::ExternalServiceError { .. } => 502,
            PracticeError::ConfigError(_) => 500,
            PracticeError::InternalError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for PracticeError {
    fn from(err: serde_json::Error) -> Self {
        PracticeError::InternalError(err.to_string())
    }
}

impl From<std::io::Error> for PracticeError {
    fn from(err: std::io::Error) -> Self {
        PracticeError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> PracticeError {
    PracticeError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> PracticeError {
    PracticeError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> PracticeError {
    PracticeError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> PracticeError {
    PracticeError::ConflictError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> PracticeError {
    PracticeError::AuthError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> PracticeError {
    PracticeError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
