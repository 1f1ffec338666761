//! Tests for core_kernel error types

use core_kernel::calendar::DateFormatError;
use core_kernel::error::CoreError;
use core_kernel::money::CurrencyFormatError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Office details");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Office details"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_from_date_format_error() {
    let error: CoreError = DateFormatError::Unparseable("x".to_string()).into();
    assert!(matches!(error, CoreError::DateFormat(_)));
    assert!(error.to_string().contains("Unparseable date"));
}

#[test]
fn test_core_error_from_currency_format_error() {
    let error: CoreError = CurrencyFormatError::FractionDigitsOutOfRange(30).into();
    assert_eq!(
        error.to_string(),
        "Currency format error: Fraction digits out of range: 30 (maximum 20)"
    );
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("bad timezone");
    assert_eq!(error.to_string(), "Configuration error: bad timezone");
}
