//! Record model: a named contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact record: one name plus an ordered list of phone numbers.
///
/// The name is fixed at construction; the phone list grows and shrinks
/// through the methods below. Duplicates are allowed and insertion order is
/// preserved. Every phone string passed in is validated through
/// [`PhoneNumber::new`] before it can touch the list, so a `Record` never
/// holds an invalid number.
///
/// Phone lookups are a linear scan, first match wins. A missing phone is
/// never an error: [`Record::edit_phone`] and [`Record::remove_phone`] are
/// silent no-ops when the value is absent, and [`Record::find_phone`]
/// returns `None`.
///
/// # Example
///
/// ```
/// use contact_book::Record;
///
/// let mut record = Record::new("John Doe");
/// record.add_phone("(123) 456-7890").unwrap();
/// assert!(record.find_phone("1234567890").unwrap().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `phone` does not reduce to exactly
    /// 10 digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(name = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone entry equal to `phone` (after normalization).
    ///
    /// Later duplicates are left in place. If no entry matches, nothing
    /// happens.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `phone` itself is not a valid phone
    /// string; a valid-but-absent value is a silent no-op.
    pub fn remove_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let target = PhoneNumber::new(phone)?;
        if let Some(idx) = self.phones.iter().position(|p| *p == target) {
            debug!(name = %self.name, phone = %target, "removing phone");
            self.phones.remove(idx);
        }
        Ok(())
    }

    /// Replace the first phone entry equal to `old` with `new`.
    ///
    /// Both arguments are validated before the list is searched, so an
    /// invalid `new` fails even when `old` is absent. If no entry matches
    /// `old`, the list is left unchanged and no error is raised.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if either argument is not a valid phone
    /// string.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|p| **p == old) {
            debug!(name = %self.name, old = %old, new = %new, "editing phone");
            *slot = new;
        }
        Ok(())
    }

    /// Find the first phone entry equal to `phone` (after normalization).
    ///
    /// Returns `Ok(None)` when no entry matches.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `phone` is not a valid phone string.
    pub fn find_phone(&self, phone: &str) -> Result<Option<&PhoneNumber>, ValidationError> {
        let target = PhoneNumber::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == target))
    }
}

// Human-readable summary line
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
