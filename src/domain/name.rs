//! Name value object.

use super::errors::ValidationError;
use super::field::{impl_field_traits, Field};

/// A contact name, used as the unique key in the address book.
///
/// Any non-blank text is accepted; no casing or character rules apply.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    const KIND: &'static str = "name";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl_field_traits!(Name);
