//! Delivery address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Address`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum AddressError {
    /// The input is empty or contains only whitespace.
    #[error("address cannot be empty")]
    Empty,
}

/// A delivery address, normalized on construction.
///
/// Addresses are stored free-form, but customers accumulate a distinct set
/// of them over time, so equality matters: leading and trailing whitespace
/// is trimmed when the address is parsed, which makes `"12 Elm St"` and
/// `"12 Elm St "` the same address.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parse an `Address` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Empty`] if the trimmed input is empty.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Deserialize goes through `parse` so stored addresses are always trimmed.
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let a = Address::parse("  12 Elm St ").unwrap();
        assert_eq!(a.as_str(), "12 Elm St");
    }

    #[test]
    fn test_trimmed_addresses_are_equal() {
        let a = Address::parse("12 Elm St").unwrap();
        let b = Address::parse("12 Elm St  ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert!(matches!(Address::parse(""), Err(AddressError::Empty)));
        assert!(matches!(Address::parse("   "), Err(AddressError::Empty)));
    }

    #[test]
    fn test_deserialize_trims() {
        let a: Address = serde_json::from_str("\" 4 Oak Ave \"").unwrap();
        assert_eq!(a.as_str(), "4 Oak Ave");
    }
}
