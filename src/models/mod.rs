//! Data models for contact records.

pub mod record;

pub use record::Record;
