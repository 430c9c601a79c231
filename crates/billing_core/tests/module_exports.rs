//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that time types are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use billing_core::types::time::Date;
    use billing_core::types::Date as ReexportedDate;

    let date = Date::from_ymd(2024, 8, 21).unwrap();
    let reexported = ReexportedDate::from_ymd(2024, 8, 21).unwrap();
    assert_eq!(date, reexported);
    assert_eq!(date.weekday_index(), 2);
}

/// Test that money types are accessible via absolute path.
#[test]
fn test_money_module_exports() {
    use billing_core::types::money::Money;
    use billing_core::types::Money as ReexportedMoney;

    let a = Money::from_f64(60.0).unwrap();
    let b = ReexportedMoney::from_f64(60.0).unwrap();
    assert_eq!(a, b);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use billing_core::types::error::{DateError, MoneyError};

    let err = DateError::InvalidDate {
        year: 2024,
        month: 2,
        day: 30,
    };
    assert!(err.to_string().contains("2024"));

    let err = MoneyError::Unrepresentable {
        value: "inf".to_string(),
    };
    assert!(err.to_string().contains("inf"));
}
