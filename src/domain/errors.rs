//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// This is the only error kind in the crate. It is raised at construction
/// or mutation time and always propagated to the caller; "not found" is
/// never an error, only a silent no-op or `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number does not reduce to exactly 10 digits.
    #[error("invalid phone number {0:?}: must contain exactly 10 digits")]
    PhoneDigitCount(String),

    /// Strict parsing saw a character other than an ASCII digit.
    #[error("invalid phone number {0:?}: expected exactly 10 digits and nothing else")]
    PhoneNonDigit(String),
}
