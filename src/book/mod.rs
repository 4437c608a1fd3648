//! AddressBook: the name-keyed collection of records.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An in-memory collection of [`Record`]s keyed by contact name.
///
/// The map is owned internally; callers only get the operations below, not
/// raw map access. A record is stored under the name it carried at insertion
/// time — the book never re-keys, so the key stays stable for the record's
/// whole life in the book.
///
/// Missing names are never an error: [`AddressBook::find`] returns `None`
/// and [`AddressBook::delete`] is a no-op. Inserting a record under an
/// already-used name silently replaces the earlier record.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut record = Record::new("John Doe");
/// record.add_phone("1234567890").unwrap();
/// book.add_record(record);
///
/// let found = book.find("John Doe").unwrap();
/// assert_eq!(found.phones()[0].as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` keyed by its current name.
    ///
    /// If a record already exists under that name it is replaced and
    /// returned; there is no uniqueness error.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_owned();
        debug!(name = %key, phones = record.phones().len(), "adding record");
        self.records.insert(key, record)
    }

    /// Look up the record stored under `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup, for editing a stored record's phones in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// An absent name is a no-op returning `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(name = %name, "deleted record");
        }
        removed
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}
