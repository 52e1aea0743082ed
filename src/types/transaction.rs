//! Transaction record for the personal ledger
//!
//! This module defines the single ledger entity, its persisted shape and the
//! validation rules applied to raw operator input before a record is accepted.

use crate::types::{CategorySet, LedgerError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Transaction identifier
///
/// A random (v4) UUID. Serialized in canonical lowercase hyphenated form.
pub type TransactionId = Uuid;

/// Number of decimal places kept for amounts (currency minor units)
pub const AMOUNT_SCALE: u32 = 2;

/// Largest accepted amount in minor units (9,999,999,999,999.99)
///
/// Fifteen significant digits survive the JSON number round-trip exactly.
pub const MAX_AMOUNT_CENTS: i64 = 999_999_999_999_999;

/// Largest accepted amount
pub fn max_amount() -> Decimal {
    Decimal::new(MAX_AMOUNT_CENTS, AMOUNT_SCALE)
}

/// True for amounts a stored record may carry: positive, at most two
/// decimal places, not above [`max_amount`]
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount.normalize().scale() <= AMOUNT_SCALE && amount <= max_amount()
}

/// A single ledger entry
///
/// The serde field names match the persisted JSON layout
/// (`UUID`, `valor`, `categoria`). Deserialization is strict: missing or
/// unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Unique id, assigned at creation and never changed
    #[serde(rename = "UUID")]
    id: TransactionId,

    /// Strictly positive amount with two decimal places
    #[serde(rename = "valor", with = "decimal_as_number")]
    amount: Decimal,

    /// Canonical category name
    #[serde(rename = "categoria")]
    category: String,
}

impl Transaction {
    /// Validate raw input and build a new transaction with a fresh id
    ///
    /// # Arguments
    ///
    /// * `raw_amount` - Amount as typed by the operator; `,` or `.` decimal separator
    /// * `raw_category` - Category in any casing, with or without accents
    /// * `categories` - The configured category set
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is not a number or is not positive after rounding
    /// - `InvalidCategory` if the category is not configured
    pub fn create(
        raw_amount: &str,
        raw_category: &str,
        categories: &CategorySet,
    ) -> Result<Self, LedgerError> {
        let amount = parse_amount(raw_amount)?;
        let category = categories.resolve(raw_category)?;
        Ok(Transaction::from_parts(Uuid::new_v4(), amount, category))
    }

    /// Assemble a record from already-validated parts
    pub(crate) fn from_parts(id: TransactionId, amount: Decimal, category: String) -> Self {
        Transaction {
            id,
            amount,
            category,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }
}

/// JSON number (de)serialization for decimals
///
/// Only numbers are accepted on input; a quoted value is a type error. The
/// number's shortest decimal representation is parsed, so `12.34` stays `12.34`.
pub(crate) mod decimal_as_number {
    use rust_decimal::Decimal;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number = f64::from_str(&value.to_string())
            .map_err(|e| S::Error::custom(format!("{} is not representable as a number: {}", value, e)))?;
        serializer.serialize_f64(number)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = f64::deserialize(deserializer)?;
        Decimal::from_str(&number.to_string())
            .map_err(|e| D::Error::custom(format!("{} is out of range: {}", number, e)))
    }
}

/// Parse an operator-supplied amount
///
/// Accepts `,` as decimal separator, surrounding whitespace and scientific
/// notation. The value is rounded to [`AMOUNT_SCALE`] places (banker's
/// rounding) and must then be strictly positive and not above [`max_amount`].
///
/// # Errors
///
/// Returns `InvalidAmount` for non-numeric input, for values that are zero
/// or negative once rounded, and for values above [`max_amount`].
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let normalized = raw.trim().replace(',', ".");
    let value = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| LedgerError::invalid_amount(raw))?
        .round_dp(AMOUNT_SCALE);

    if !is_valid_amount(value) {
        return Err(LedgerError::invalid_amount(raw));
    }
    Ok(value)
}

/// Parse an operator-supplied id
///
/// UUID parsing is case-insensitive, so any casing of a stored id matches.
/// Returns `None` for input that is not a UUID at all.
pub fn parse_id(raw: &str) -> Option<TransactionId> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn categories() -> CategorySet {
        CategorySet::new(["food", "fuel", "Saúde"])
    }

    #[rstest]
    #[case::integer("100", Decimal::new(100, 0))]
    #[case::dot("12.34", Decimal::new(1234, 2))]
    #[case::comma("12,34", Decimal::new(1234, 2))]
    #[case::whitespace("  7.5 ", Decimal::new(75, 1))]
    #[case::rounds_down("10.004", Decimal::new(1000, 2))]
    #[case::rounds_up("10.006", Decimal::new(1001, 2))]
    #[case::bankers_rounding("0.125", Decimal::new(12, 2))]
    #[case::scientific("1e3", Decimal::new(1000, 0))]
    #[case::largest("9999999999999.99", Decimal::new(MAX_AMOUNT_CENTS, 2))]
    fn test_parse_amount_valid(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-5")]
    #[case::rounds_to_zero("0.001")]
    #[case::empty("")]
    #[case::text("ten")]
    #[case::thousands_separator("1.234,56")]
    #[case::above_maximum("10000000000000")]
    #[case::decimal_max("79228162514264337593543950335")]
    fn test_parse_amount_invalid(#[case] raw: &str) {
        assert_eq!(
            parse_amount(raw).unwrap_err(),
            LedgerError::invalid_amount(raw)
        );
    }

    #[test]
    fn test_create_canonicalizes_category() {
        let tx = Transaction::create("19,90", "SAÚDE", &categories()).unwrap();
        assert_eq!(tx.amount(), Decimal::new(1990, 2));
        assert_eq!(tx.category(), "saude");
        assert_eq!(tx.id().get_version_num(), 4);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let a = Transaction::create("1", "food", &categories()).unwrap();
        let b = Transaction::create("1", "food", &categories()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_create_rejects_amount_before_category() {
        let result = Transaction::create("0", "toys", &categories());
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let result = Transaction::create("10", "Toys", &categories());
        assert_eq!(result.unwrap_err(), LedgerError::invalid_category("Toys"));
    }

    #[test]
    fn test_serialized_shape() {
        let id = Uuid::parse_str("0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a").unwrap();
        let tx = Transaction::from_parts(id, Decimal::new(1234, 2), "food".to_string());
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a",
                "valor": 12.34,
                "categoria": "food"
            })
        );
    }

    #[rstest]
    #[case::missing_field(r#"{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": 1.0}"#)]
    #[case::unknown_field(
        r#"{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": 1.0, "categoria": "food", "extra": 1}"#
    )]
    #[case::bad_uuid(r#"{"UUID": "nope", "valor": 1.0, "categoria": "food"}"#)]
    #[case::string_amount(
        r#"{"UUID": "0b5a3c2e-6a8f-4d7e-9b1c-2f3e4d5c6b7a", "valor": "1.0", "categoria": "food"}"#
    )]
    fn test_strict_deserialization(#[case] json: &str) {
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[rstest]
    #[case::largest(Decimal::new(MAX_AMOUNT_CENTS, 2))]
    #[case::fifteen_digits(Decimal::new(123_456_789_012_345, 2))]
    #[case::one_cent(Decimal::new(1, 2))]
    fn test_amount_survives_json_number(#[case] amount: Decimal) {
        let tx = Transaction::from_parts(Uuid::new_v4(), amount, "food".to_string());

        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(back.amount(), amount);
        assert_eq!(back, tx);
    }

    #[rstest]
    #[case::valid(Decimal::new(1005, 2), true)]
    #[case::trailing_zeros(Decimal::new(10_000, 3), true)]
    #[case::zero(Decimal::ZERO, false)]
    #[case::three_decimals(Decimal::new(1005, 3), false)]
    #[case::above_maximum(Decimal::new(MAX_AMOUNT_CENTS + 1, 2), false)]
    fn test_is_valid_amount(#[case] amount: Decimal, #[case] expected: bool) {
        assert_eq!(is_valid_amount(amount), expected);
    }

    #[test]
    fn test_parse_id_is_case_insensitive() {
        let id = Uuid::new_v4();
        let upper = id.to_string().to_uppercase();
        assert_eq!(parse_id(&upper), Some(id));
        assert_eq!(parse_id("not-an-id"), None);
    }
}
