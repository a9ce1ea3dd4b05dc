//! Currency capability set and structural validation.
//!
//! Any type implementing [`Currency`] can be registered and attached to a
//! [`Value`](crate::Value). Registries and values only ever talk to the trait,
//! so custom currencies live side by side with the built-in ISO 4217 ones.

use crate::error::{MoneyError, Result, NO_CURRENCY};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a currency. Values and registries hold clones of it.
pub type CurrencyRef = Arc<dyn Currency>;

/// Identity and metadata of a currency.
///
/// # Identifiers
///
/// - `unique_id`: library-wide numeric ID. `0` is reserved for "no currency".
///   Positive IDs belong to the built-in tables; use negative IDs for
///   caller-defined currencies.
/// - `code`: alphanumeric code, unique inside its standard (e.g. `"EUR"`).
/// - `unique_code`: `standard + "-" + code`, unique across standards
///   (e.g. `"ISO4217-EUR"`).
pub trait Currency: fmt::Debug + Send + Sync {
    /// English or native name of the currency.
    fn name(&self) -> &str;

    /// Alphanumeric name of the standard the currency is defined in.
    fn standard(&self) -> &str;

    fn unique_id(&self) -> i32;

    /// Code of the currency inside its standard.
    fn code(&self) -> &str;

    /// Code that is unique across all standards.
    fn unique_code(&self) -> String {
        format!("{}-{}", self.standard(), self.code())
    }

    /// Display symbol, e.g. `"US$"`. Only meant for human readable output.
    fn symbol(&self) -> &str;

    /// Narrow symbol variant, e.g. `"$"`. Ambiguous without context.
    fn narrow_symbol(&self) -> &str;

    /// Minimum representable increment of the currency.
    ///
    /// `None` or zero means the currency is infinitely divisible.
    fn smallest_unit(&self) -> Option<Decimal>;
}

/// Returns `true` if both sides refer to the same currency, or both to none.
///
/// Currencies are compared by their unique code, so a value decoded through
/// one registry still matches a value created through another.
pub fn same_currency(a: Option<&CurrencyRef>, b: Option<&CurrencyRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.unique_code() == b.unique_code(),
        _ => false,
    }
}

/// Label for error messages: the unique code, or [`NO_CURRENCY`].
pub(crate) fn label(currency: Option<&CurrencyRef>) -> String {
    currency
        .map(|c| c.unique_code())
        .unwrap_or_else(|| NO_CURRENCY.to_string())
}

fn first_illegal_char(s: &str) -> Option<char> {
    s.chars().find(|c| !c.is_ascii_alphanumeric())
}

/// Checks a currency definition against the structural invariants every
/// registered currency has to satisfy.
pub fn validate_currency(currency: &dyn Currency) -> Result<()> {
    let (standard, code, unique_code) = (
        currency.standard(),
        currency.code(),
        currency.unique_code(),
    );
    let invalid = |reason: String| MoneyError::InvalidCurrency {
        currency: unique_code.clone(),
        reason,
    };

    if currency.unique_id() == 0 {
        return Err(invalid(format!(
            "unique ID 0 is reserved for {NO_CURRENCY}"
        )));
    }

    if code.is_empty() {
        return Err(invalid("code is empty".to_string()));
    }
    if let Some(c) = first_illegal_char(code) {
        return Err(invalid(format!("code contains illegal character {c:?}")));
    }

    if standard.is_empty() {
        return Err(invalid("standard is empty".to_string()));
    }
    if let Some(c) = first_illegal_char(standard) {
        return Err(invalid(format!(
            "standard contains illegal character {c:?}"
        )));
    }

    let expected = format!("{standard}-{code}");
    if unique_code != expected {
        return Err(invalid(format!(
            "unique code is not of the form \"Standard-Code\", expected {expected:?}"
        )));
    }

    let (symbol, narrow) = (currency.symbol(), currency.narrow_symbol());
    if symbol.is_empty() || narrow.is_empty() {
        return Err(invalid(format!(
            "symbol is {symbol:?} and narrow symbol is {narrow:?}, both need to be non empty"
        )));
    }

    if let Some(unit) = currency.smallest_unit() {
        if unit < Decimal::ZERO {
            return Err(invalid(format!("smallest unit {unit} is negative")));
        }
    }

    Ok(())
}
