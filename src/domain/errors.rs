//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    /// A page size that is zero or not a number.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),
}

impl ValidationError {
    /// The field kind that rejected the value.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidPhone(_) => "phone",
            Self::InvalidBirthday(_) => "birthday",
            Self::InvalidPageSize(_) => "page_size",
        }
    }
}
