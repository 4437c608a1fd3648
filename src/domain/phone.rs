//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for 10-digit phone numbers.
///
/// A `PhoneNumber` is validated at construction time and immutable after:
/// "editing" a phone means constructing a new value and replacing the old
/// one in its owning [`Record`](crate::Record).
///
/// Two construction policies are available:
///
/// - [`PhoneNumber::new`] strips formatting characters and requires exactly
///   10 digits to remain; the normalized digit string is what gets stored.
/// - [`PhoneNumber::parse_strict`] requires the input to already be exactly
///   10 digits with no other characters.
///
/// # Example
///
/// ```
/// use contact_book::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing then validating.
    ///
    /// # Validation Rules
    ///
    /// - Every non-digit character (spaces, hyphens, parentheses, plus
    ///   signs, anything else) is stripped before validation
    /// - Exactly 10 ASCII digits must remain
    /// - The stored value is the 10-digit normalized string
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PhoneDigitCount`] if the input does not
    /// reduce to exactly 10 digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != 10 {
            return Err(ValidationError::PhoneDigitCount(phone));
        }

        Ok(Self(digits))
    }

    /// Create a new PhoneNumber without normalizing.
    ///
    /// The input must already be exactly 10 ASCII digits; formatting
    /// characters are rejected rather than stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PhoneNonDigit`] if any character is not
    /// an ASCII digit, or [`ValidationError::PhoneDigitCount`] if the digit
    /// count is not exactly 10.
    pub fn parse_strict(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PhoneNonDigit(phone));
        }
        if phone.len() != 10 {
            return Err(ValidationError::PhoneDigitCount(phone));
        }

        Ok(Self(phone))
    }

    /// Get the stored 10-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
