//! Contact Book - an in-memory contact directory with validated phone numbers.
//!
//! This library provides named contact records holding 10-digit phone
//! numbers, keyed by contact name. Phone numbers are validated at
//! construction time, so invalid data is unrepresentable; missing names and
//! phones are silent no-ops rather than errors.
//!
//! # Architecture
//!
//! - **domain**: Value objects ([`ContactName`], [`PhoneNumber`]) and the
//!   [`ValidationError`] they raise
//! - **models**: The [`Record`] model, one name plus an ordered phone list
//! - **book**: The [`AddressBook`] collection, a name-keyed map of records
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John Doe");
//! john.add_phone("(123) 456-7890")?;
//! book.add_record(john);
//!
//! let record = book.find("John Doe").unwrap();
//! assert!(record.find_phone("1234567890")?.is_some());
//! # Ok::<(), contact_book::ValidationError>(())
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod models;

pub use book::AddressBook;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use models::Record;
