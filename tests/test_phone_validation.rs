//! End-to-end tests for phone number validation and normalization.
//!
//! Covers both construction policies: the default normalizing constructor
//! (strip formatting, then require exactly 10 digits) and the strict parser
//! (input must already be exactly 10 digits).

use contact_book::{PhoneNumber, ValidationError};

#[test]
fn test_ten_digit_input_round_trips() {
    let phone = PhoneNumber::new("1234567890").unwrap();
    assert_eq!(phone.as_str(), "1234567890");
    assert_eq!(phone.into_inner(), "1234567890");
}

#[test]
fn test_formatted_input_normalizes_to_digits() {
    for raw in ["(123) 456-7890", "123-456-7890", "123.456.7890", "123 456 7890"] {
        let phone = PhoneNumber::new(raw).unwrap();
        assert_eq!(phone.as_str(), "1234567890", "input: {raw}");
    }
}

#[test]
fn test_wrong_digit_count_fails() {
    for raw in ["", "123456789", "12345678901", "phone", "(12) 345-678"] {
        let result = PhoneNumber::new(raw);
        assert!(
            matches!(result, Err(ValidationError::PhoneDigitCount(_))),
            "input {raw:?} should fail digit-count validation"
        );
    }
}

#[test]
fn test_country_code_is_not_dropped() {
    // Normalization strips formatting only; an 11th digit still fails.
    assert!(PhoneNumber::new("+1 (123) 456-7890").is_err());
}

#[test]
fn test_strict_parser_rejects_formatting() {
    assert!(PhoneNumber::parse_strict("1234567890").is_ok());

    let result = PhoneNumber::parse_strict("(123) 456-7890");
    assert!(matches!(result, Err(ValidationError::PhoneNonDigit(_))));

    let result = PhoneNumber::parse_strict("123456789");
    assert!(matches!(result, Err(ValidationError::PhoneDigitCount(_))));
}

#[test]
fn test_error_carries_offending_input() {
    let err = PhoneNumber::new("12345").unwrap_err();
    assert_eq!(err, ValidationError::PhoneDigitCount("12345".to_string()));
    assert!(err.to_string().contains("12345"));
}

#[test]
fn test_equality_is_by_normalized_value() {
    let a = PhoneNumber::new("(123) 456-7890").unwrap();
    let b = PhoneNumber::new("1234567890").unwrap();
    let c = PhoneNumber::parse_strict("1234567890").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}
