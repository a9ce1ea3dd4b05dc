//! Immutable monetary value: an exact decimal amount and an optional currency.
//!
//! The canonical text form is `"<amount> <unique code>"`, or just
//! `"<amount>"` for values without currency. It is locale independent and
//! parses back without loss.

use crate::currency::{label, same_currency, CurrencyRef};
use crate::error::{MoneyError, Result};
use crate::registry::{currencies, CurrencyRegistry};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Separator between amount and unique code.
pub const SEPARATOR: char = ' ';

/// Accepted in place of [`SEPARATOR`] when parsing.
const NO_BREAK_SPACE: char = '\u{00A0}';

/// A monetary value in a specific currency, or in no currency at all.
///
/// Values are never mutated; every operation returns a new value. Many
/// values can share the same currency.
///
/// # Examples
///
/// ```
/// use money_split::Value;
///
/// let v = Value::parse("-10000.123 ISO4217-EUR").unwrap();
/// assert_eq!(v.to_string(), "-10000.123 ISO4217-EUR");
/// assert_eq!(v.currency().unwrap().code(), "EUR");
/// ```
#[derive(Clone)]
pub struct Value {
    pub(crate) amount: Decimal,
    pub(crate) currency: Option<CurrencyRef>,
}

impl Value {
    /// Creates a value from a decimal amount and currency.
    pub fn new(amount: Decimal, currency: Option<CurrencyRef>) -> Self {
        Value { amount, currency }
    }

    pub fn from_i64(amount: i64, currency: Option<CurrencyRef>) -> Self {
        Value::new(Decimal::from(amount), currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Option<CurrencyRef>) -> Self {
        Value::new(Decimal::ZERO, currency)
    }

    /// Parses the canonical text form, resolving the unique code through the
    /// default registry.
    ///
    /// ```
    /// use money_split::Value;
    ///
    /// assert!(Value::parse("-10000.123").unwrap().currency().is_none());
    /// assert!(Value::parse("-10000.123 ISO4217-EUR").is_ok());
    /// assert!(Value::parse("-10000.123 EUR").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_in(input, currencies())
    }

    /// Parses the canonical text form, resolving the unique code through
    /// `registry`.
    pub fn parse_in(input: &str, registry: &CurrencyRegistry) -> Result<Self> {
        let (amount, currency) = parse_parts(input, registry, None)?;
        Ok(Value { amount, currency })
    }

    /// Parses the canonical text form into a value of the given currency.
    ///
    /// A string without unique code takes `currency`. A string with a unique
    /// code must name `currency`; it is matched against `currency` first and
    /// against the default registry second, so unregistered custom
    /// currencies work as well.
    pub fn parse_with_currency(input: &str, currency: Option<&CurrencyRef>) -> Result<Self> {
        let (amount, parsed) = parse_parts(input, currencies(), currency)?;
        let resolved = parsed.or_else(|| currency.cloned());

        if !same_currency(resolved.as_ref(), currency) {
            return Err(MoneyError::DifferentCurrencies {
                left: label(resolved.as_ref()),
                right: label(currency),
            });
        }

        Ok(Value {
            amount,
            currency: resolved,
        })
    }

    /// Like [`Value::parse`].
    ///
    /// # Panics
    ///
    /// Panics if the input can't be parsed. Only use it with inputs known to
    /// be valid, such as literals.
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(value) => value,
            Err(e) => panic!("failed to parse monetary value {input:?}: {e}"),
        }
    }

    /// Like [`Value::parse_with_currency`].
    ///
    /// # Panics
    ///
    /// Panics if the input can't be parsed or names another currency.
    pub fn must_parse_with_currency(input: &str, currency: Option<&CurrencyRef>) -> Self {
        match Self::parse_with_currency(input, currency) {
            Ok(value) => value,
            Err(e) => panic!("failed to parse monetary value {input:?}: {e}"),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency, or `None` for currency-less values.
    pub fn currency(&self) -> Option<&CurrencyRef> {
        self.currency.as_ref()
    }

    /// Returns `true` if both values carry the same currency (or both none).
    pub fn same_currency_as(&self, other: &Value) -> bool {
        same_currency(self.currency(), other.currency())
    }

    /// Fails with [`MoneyError::DifferentCurrencies`] unless both values carry
    /// the same currency.
    pub(crate) fn check_same_currency(&self, other: &Value) -> Result<()> {
        if self.same_currency_as(other) {
            Ok(())
        } else {
            Err(MoneyError::DifferentCurrencies {
                left: label(self.currency()),
                right: label(other.currency()),
            })
        }
    }
}

/// Parses an amount, accepting scientific notation as a fallback.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal> {
    Decimal::from_str(input)
        .or_else(|e| {
            if input.contains(['e', 'E']) {
                Decimal::from_scientific(input)
            } else {
                Err(e)
            }
        })
        .map_err(|source| MoneyError::InvalidAmount {
            input: input.to_string(),
            source,
        })
}

/// Splits `"Amount"` or `"Amount UniqueCode"` into its parts.
///
/// The unique code is matched against `expected` first and looked up in
/// `registry` second. The returned currency is `None` only if the input has
/// no unique code.
pub(crate) fn parse_parts(
    input: &str,
    registry: &CurrencyRegistry,
    expected: Option<&CurrencyRef>,
) -> Result<(Decimal, Option<CurrencyRef>)> {
    let normalized = input.replace(NO_BREAK_SPACE, " ");
    let parts: Vec<&str> = normalized.split(SEPARATOR).collect();

    let (amount, currency) = match parts.as_slice() {
        [amount] => (*amount, None),
        [amount, unique_code] => {
            let matched = match expected {
                Some(c) if c.unique_code() == *unique_code => c.clone(),
                _ => registry.resolve_unique_code(unique_code)?,
            };
            (*amount, Some(matched))
        }
        _ => return Err(MoneyError::TooManySeparators(input.to_string())),
    };

    Ok((parse_amount(amount)?, currency))
}

impl FromStr for Value {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self> {
        Value::parse(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.currency {
            Some(c) => write!(f, "{}{}{}", self.amount, SEPARATOR, c.unique_code()),
            None => write!(f, "{}", self.amount),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("amount", &self.amount)
            .field("currency", &self.currency.as_ref().map(|c| c.unique_code()))
            .finish()
    }
}

/// Equal amounts in the same currency. Values in different currencies are
/// never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_currency_as(other) && self.amount == other.amount
    }
}

impl Eq for Value {}

/// Values in different currencies are unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.same_currency_as(other) {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}
