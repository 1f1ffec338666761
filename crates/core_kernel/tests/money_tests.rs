//! Tests for the Money module
//!
//! Tests cover `ar-AE` dirham formatting, rounding, malformed input
//! handling, and the defensive coercion of transport amounts.

use core_kernel::{
    format_currency, format_currency_default, format_currency_str, Currency, CurrencyFormatError,
    Money, RawAmount,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const RLM: &str = "\u{200F}";
const NBSP: &str = "\u{a0}";

fn aed(number: &str) -> String {
    format!("{RLM}{number}{NBSP}د.إ.{RLM}")
}

mod formatting {
    use super::*;

    #[test]
    fn test_two_fraction_digits_are_padded() {
        assert_eq!(format_currency(dec!(1234.5), 2).unwrap(), aed("1,234.50"));
    }

    #[test]
    fn test_zero_fraction_digits_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(1234.5), 0).unwrap(), aed("1,235"));
        assert_eq!(format_currency(dec!(0.5), 0).unwrap(), aed("1"));
        assert_eq!(format_currency(dec!(2.5), 0).unwrap(), aed("3"));
    }

    #[test]
    fn test_default_uses_no_fraction_digits() {
        assert_eq!(format_currency_default(dec!(999.49)), aed("999"));
        assert_eq!(format_currency_default(dec!(1000)), aed("1,000"));
    }

    #[test]
    fn test_extra_fraction_digits_are_trimmed_to_minimum() {
        assert_eq!(format_currency(dec!(10), 4).unwrap(), aed("10.00"));
        assert_eq!(format_currency(dec!(10.125), 4).unwrap(), aed("10.125"));
        assert_eq!(format_currency(dec!(10.12345), 4).unwrap(), aed("10.1235"));
    }

    #[test]
    fn test_single_fraction_digit() {
        assert_eq!(format_currency(dec!(12), 1).unwrap(), aed("12.0"));
        assert_eq!(format_currency(dec!(12.25), 1).unwrap(), aed("12.3"));
    }

    #[test]
    fn test_negative_amount_gets_marked_minus() {
        assert_eq!(
            format_currency(dec!(-2.5), 0).unwrap(),
            aed("\u{200E}-3")
        );
    }

    #[test]
    fn test_very_large_amount_formats() {
        let huge = Decimal::MAX;
        let formatted = format_currency(huge, 2).unwrap();
        assert!(formatted.starts_with(&format!("{RLM}79,228,162,514")));
        assert!(formatted.ends_with(&format!("{NBSP}د.إ.{RLM}")));
    }

    #[test]
    fn test_fraction_digits_out_of_range() {
        assert_eq!(
            format_currency(dec!(1), 21),
            Err(CurrencyFormatError::FractionDigitsOutOfRange(21))
        );
    }

    #[test]
    fn test_string_input() {
        assert_eq!(format_currency_str(" 1500 ", 0).unwrap(), aed("1,500"));
        assert_eq!(format_currency_str("1.5e3", 0).unwrap(), aed("1,500"));
    }

    #[test]
    fn test_malformed_string_input_fails() {
        assert_eq!(
            format_currency_str("abc", 2),
            Err(CurrencyFormatError::Malformed("abc".to_string()))
        );
        assert!(format_currency_str("", 2).is_err());
    }
}

mod money_values {
    use super::*;

    #[test]
    fn test_money_display_matches_invoice_formatting() {
        let m = Money::aed(dec!(1234.5));
        assert_eq!(m.to_string(), format_currency(dec!(1234.5), 2).unwrap());
    }

    #[test]
    fn test_money_is_dirhams() {
        let m = Money::aed(dec!(0.5));
        assert_eq!(m.currency(), Currency::AED);
        assert_eq!(m.currency().code(), "AED");
        assert_eq!(m.amount(), dec!(0.5));
        assert_eq!(m.to_string(), aed("0.50"));
    }
}

mod coercion {
    use super::*;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(RawAmount::from(50).coerce(), dec!(50));
        assert_eq!(RawAmount::Number(dec!(12.75)).coerce(), dec!(12.75));
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert_eq!(RawAmount::from("100").coerce(), dec!(100));
        assert_eq!(RawAmount::from(" 99.5 ").coerce(), dec!(99.5));
    }

    #[test]
    fn test_invalid_values_become_zero() {
        assert_eq!(RawAmount::from("abc").coerce(), Decimal::ZERO);
        assert_eq!(RawAmount::from("").coerce(), Decimal::ZERO);
        assert_eq!(RawAmount::Missing.coerce(), Decimal::ZERO);
        assert_eq!(RawAmount::from(-5).coerce(), Decimal::ZERO);
        assert_eq!(RawAmount::from("-5").coerce(), Decimal::ZERO);
    }

    #[test]
    fn test_option_conversion() {
        assert!(RawAmount::from(None::<i64>).is_missing());
        assert_eq!(RawAmount::from(Some(7)).coerce(), dec!(7));
    }
}
