//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name, used as the [`AddressBook`](crate::AddressBook) key.
///
/// Unlike [`PhoneNumber`](crate::PhoneNumber) there is no format rule: any
/// string is accepted verbatim, so construction is infallible.
///
/// # Example
///
/// ```
/// use contact_book::ContactName;
///
/// let name = ContactName::new("John Doe");
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName; the value is stored as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
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

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
