//! The `Field` abstraction shared by every validated contact value.

use super::errors::ValidationError;
use std::fmt;

/// A validated scalar wrapper.
///
/// Implementors reject malformed input at construction time, so holding a
/// value of the type is proof that the format rule holds. Rendering through
/// [`fmt::Display`] or [`Field::as_str`] returns the raw value verbatim.
pub trait Field: fmt::Display + Sized {
    /// Human-readable kind used in diagnostics (`"name"`, `"phone"`, ...).
    const KIND: &'static str;

    /// Validate `raw` and wrap it.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The stored raw value.
    fn as_str(&self) -> &str;
}

/// Implements `Display`, `FromStr` and validating serde support for a field.
macro_rules! impl_field_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::Field::as_str(self))
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::domain::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::domain::Field>::parse(s)
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize($crate::domain::Field::as_str(self), serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::domain::Field>::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_field_traits;
