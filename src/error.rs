//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Coarse classification the command layer maps to user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field value was malformed.
    Validation,
    /// A contact or phone required by the operation is absent.
    NotFound,
    /// A command was invoked with too few arguments.
    InsufficientArguments,
}

/// Errors returned by record, address book and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// No phone with this value on the record
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// Command invoked with too few arguments
    #[error("Not enough arguments for '{command}': expected at least {expected}, got {got}")]
    InsufficientArguments {
        command: String,
        expected: usize,
        got: usize,
    },
}

impl ContactError {
    /// Classify the error without inspecting its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) => ErrorKind::NotFound,
            Self::InsufficientArguments { .. } => ErrorKind::InsufficientArguments,
        }
    }

    pub(crate) fn insufficient(command: &str, expected: usize, got: usize) -> Self {
        Self::InsufficientArguments {
            command: command.to_string(),
            expected,
            got,
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the contacts file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The contacts file is not a valid address book document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by the service layer: a contact failure or a failed save.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The operation itself was rejected
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// The change was applied but could not be persisted
    #[error("Failed to save contacts: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Kind of the underlying contact error, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Contact(e) => Some(e.kind()),
            Self::Store(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::Contact(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
