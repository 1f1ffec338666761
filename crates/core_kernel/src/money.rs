//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal, the `ar-AE` currency formatter used on invoices,
//! and [`RawAmount`], the transport-level amount that may arrive from the
//! backend as a number, a string, or not at all.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Right-to-left mark wrapped around `ar-AE` currency strings
const RLM: char = '\u{200F}';
/// Left-to-right mark placed before the minus sign
const LRM: char = '\u{200E}';
/// No-break space between the number and the currency symbol
const NBSP: char = '\u{00A0}';

/// Largest `max_fraction_digits` accepted by [`format_currency`]
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// Fraction digits shown for [`Money`]
const INVOICE_FRACTION_DIGITS: u32 = 2;

/// Currency codes following ISO 4217
///
/// The office bills in dirhams only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    AED,
}

impl Currency {
    /// Returns the currency symbol as printed in the `ar-AE` locale
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::AED => "د.إ.",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AED => "AED",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the currency formatter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyFormatError {
    #[error("Malformed amount: {0:?}")]
    Malformed(String),

    #[error("Fraction digits out of range: {0} (maximum 20)")]
    FractionDigitsOutOfRange(u32),
}

/// A settled amount as printed on invoices and service lists
///
/// Displays as an `ar-AE` currency string with two fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a dirham amount
    pub fn aed(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::AED,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = render_number(self.amount, INVOICE_FRACTION_DIGITS, INVOICE_FRACTION_DIGITS);
        write!(f, "{RLM}{number}{NBSP}{}{RLM}", self.currency.symbol())
    }
}

/// Formats an amount as an `ar-AE` United Arab Emirates dirham string.
///
/// The output is `RLM + number + NBSP + "د.إ." + RLM` with Latin digits,
/// comma grouping and a dot decimal separator, matching what
/// `Intl.NumberFormat('ar-ae', { style: 'currency', currency: 'AED' })`
/// prints. At most `max_fraction_digits` fraction digits are shown and at
/// least `min(2, max_fraction_digits)`.
///
/// Rounding is half away from zero (ECMA-402 `halfExpand`), so `0.5`
/// becomes `1` and `-2.5` becomes `-3` at zero fraction digits.
///
/// # Errors
///
/// Returns `CurrencyFormatError::FractionDigitsOutOfRange` when
/// `max_fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
pub fn format_currency(
    amount: Decimal,
    max_fraction_digits: u32,
) -> Result<String, CurrencyFormatError> {
    if max_fraction_digits > MAX_FRACTION_DIGITS {
        return Err(CurrencyFormatError::FractionDigitsOutOfRange(
            max_fraction_digits,
        ));
    }
    let number = render_number(amount, max_fraction_digits.min(2), max_fraction_digits);
    Ok(format!(
        "{RLM}{number}{NBSP}{}{RLM}",
        Currency::AED.symbol()
    ))
}

/// Formats an amount with no fraction digits, the list-view default
pub fn format_currency_default(amount: Decimal) -> String {
    let number = render_number(amount, 0, 0);
    format!("{RLM}{number}{NBSP}{}{RLM}", Currency::AED.symbol())
}

/// Parses `raw` as a decimal and formats it with [`format_currency`].
///
/// # Errors
///
/// Returns `CurrencyFormatError::Malformed` when `raw` is not a number.
pub fn format_currency_str(
    raw: &str,
    max_fraction_digits: u32,
) -> Result<String, CurrencyFormatError> {
    let amount =
        parse_decimal(raw).ok_or_else(|| CurrencyFormatError::Malformed(raw.to_string()))?;
    format_currency(amount, max_fraction_digits)
}

/// Renders the signed, grouped number part of a currency string
fn render_number(amount: Decimal, min_fraction: u32, max_fraction: u32) -> String {
    let rounded =
        amount.round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (digits.as_str(), ""),
    };

    let mut fraction = frac_part.to_string();
    while (fraction.len() as u32) < min_fraction {
        fraction.push('0');
    }

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push(LRM);
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a decimal in plain or scientific notation, ignoring surrounding whitespace
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// A monetary value as delivered by the transport layer.
///
/// The backend is untrusted JSON: paid amounts show up as numbers, as
/// numeric strings, as arbitrary strings, or as `null`. The value is kept
/// verbatim and only turned into a number by [`RawAmount::coerce`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawAmount {
    /// A JSON number
    Number(Decimal),
    /// A JSON string, unparsed
    Text(String),
    /// `null` or an absent field
    #[default]
    Missing,
}

impl RawAmount {
    /// Coerces the raw value to a non-negative decimal.
    ///
    /// COERCION RULES (auditable degradation, never a failure):
    /// - numbers are taken as-is,
    /// - strings are trimmed; empty strings count as `0`; plain and
    ///   scientific notation are parsed,
    /// - non-numeric strings, negative values and missing values count as `0`.
    ///
    /// Every present-but-invalid value that is coerced to zero is logged at
    /// `warn` level with the offending raw text.
    pub fn coerce(&self) -> Decimal {
        match self {
            RawAmount::Number(value) => non_negative_or_zero(*value, &value.to_string()),
            RawAmount::Text(text) if text.trim().is_empty() => Decimal::ZERO,
            RawAmount::Text(text) => match parse_decimal(text) {
                Some(value) => non_negative_or_zero(value, text),
                None => {
                    tracing::warn!(raw = %text, "non-numeric amount coerced to zero");
                    Decimal::ZERO
                }
            },
            RawAmount::Missing => Decimal::ZERO,
        }
    }

    /// Returns true when the value is absent
    pub fn is_missing(&self) -> bool {
        matches!(self, RawAmount::Missing)
    }
}

fn non_negative_or_zero(value: Decimal, raw: &str) -> Decimal {
    if value.is_sign_negative() && !value.is_zero() {
        tracing::warn!(raw = %raw, "negative amount coerced to zero");
        return Decimal::ZERO;
    }
    value
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Number(value)
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Number(Decimal::from(value))
    }
}

impl From<i32> for RawAmount {
    fn from(value: i32) -> Self {
        RawAmount::Number(Decimal::from(value))
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl<T: Into<RawAmount>> From<Option<T>> for RawAmount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawAmount::Missing)
    }
}

impl Serialize for RawAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawAmount::Number(value) => rust_decimal::serde::float::serialize(value, serializer),
            RawAmount::Text(text) => serializer.serialize_str(text),
            RawAmount::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(serde_json::Value::Null) => RawAmount::Missing,
            Some(serde_json::Value::Number(number)) => {
                let text = number.to_string();
                match parse_decimal(&text) {
                    Some(value) => RawAmount::Number(value),
                    None => RawAmount::Text(text),
                }
            }
            Some(serde_json::Value::String(text)) => RawAmount::Text(text),
            Some(other) => RawAmount::Text(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_display_uses_two_fraction_digits() {
        let m = Money::aed(dec!(1500));
        assert_eq!(m.to_string(), "\u{200F}1,500.00\u{a0}د.إ.\u{200F}");
    }

    #[test]
    fn test_money_serializes_with_currency_code() {
        let json = serde_json::to_value(Money::aed(dec!(10))).unwrap();
        assert_eq!(json["currency"], "AED");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_render_number_trims_to_minimum() {
        assert_eq!(render_number(dec!(12.500), 0, 3), "12.5");
        assert_eq!(render_number(dec!(12), 2, 2), "12.00");
        assert_eq!(render_number(dec!(-0.4), 0, 0), "0");
    }

    #[test]
    fn test_raw_amount_deserializes_every_shape() {
        let number: RawAmount = serde_json::from_str("50").unwrap();
        let text: RawAmount = serde_json::from_str("\"100\"").unwrap();
        let null: RawAmount = serde_json::from_str("null").unwrap();
        let boolean: RawAmount = serde_json::from_str("true").unwrap();

        assert_eq!(number, RawAmount::Number(dec!(50)));
        assert_eq!(text, RawAmount::Text("100".to_string()));
        assert_eq!(null, RawAmount::Missing);
        assert_eq!(boolean.coerce(), Decimal::ZERO);
    }

    #[test]
    fn test_raw_amount_serde_keeps_the_shape() {
        for amount in [
            RawAmount::Number(dec!(50)),
            RawAmount::Number(dec!(234.5)),
            RawAmount::Text("50".to_string()),
            RawAmount::Text("n/a".to_string()),
            RawAmount::Missing,
        ] {
            let json = serde_json::to_string(&amount).unwrap();
            let back: RawAmount = serde_json::from_str(&json).unwrap();
            assert_eq!(back, amount, "{json}");
        }
        assert_eq!(serde_json::to_value(RawAmount::from(50)).unwrap(), serde_json::json!(50.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coerce_of_numeric_text_matches_number(minor in 0i64..1_000_000_000i64) {
            let value = Decimal::new(minor, 2);
            let text = RawAmount::Text(value.to_string());
            prop_assert_eq!(text.coerce(), RawAmount::Number(value).coerce());
        }

        #[test]
        fn format_currency_never_fails_for_valid_digits(
            minor in i64::MIN..i64::MAX,
            digits in 0u32..=MAX_FRACTION_DIGITS
        ) {
            let amount = Decimal::new(minor, 4);
            prop_assert!(format_currency(amount, digits).is_ok());
        }
    }
}
