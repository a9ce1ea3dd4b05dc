//! Currency-aware arithmetic and comparisons on [`Value`].
//!
//! Every binary operation checks currency compatibility first. Nothing is
//! coerced: mixing currencies, or a currency with no currency, is an error.

use crate::currency::label;
use crate::error::{MoneyError, Result};
use crate::value::Value;
use std::cmp::Ordering;

/// Returns the sum of all given values. The currencies must not differ.
///
/// ```
/// use money_split::{sum, Value};
///
/// let a = Value::must_parse("12.34 ISO4217-EUR");
/// let total = sum(&a, [&a]).unwrap();
/// assert_eq!(total.to_string(), "24.68 ISO4217-EUR");
///
/// assert!(sum(&a, [&Value::must_parse("12.34")]).is_err());
/// ```
pub fn sum<'a, I>(first: &Value, values: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .try_fold(first.clone(), |total, value| total.add(value))
}

/// Like [`sum`].
///
/// # Panics
///
/// Panics if the currencies differ or the total overflows.
pub fn must_sum<'a, I>(first: &Value, values: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    match sum(first, values) {
        Ok(total) => total,
        Err(e) => panic!("failed to sum monetary values: {e}"),
    }
}

impl Value {
    /// Returns `self + other`.
    pub fn add(&self, other: &Value) -> Result<Value> {
        self.check_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Value::new(amount, self.currency.clone()))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Value) -> Result<Value> {
        self.check_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Value::new(amount, self.currency.clone()))
    }

    /// Returns `self * other`.
    ///
    /// At most one factor may carry a currency, the product carries it.
    pub fn mul(&self, other: &Value) -> Result<Value> {
        let currency = match (&self.currency, &other.currency) {
            (Some(_), Some(_)) if self.same_currency_as(other) => {
                return Err(MoneyError::CurrencySquared {
                    currency: label(self.currency()),
                })
            }
            (Some(_), Some(_)) => {
                return Err(MoneyError::DifferentCurrencies {
                    left: label(self.currency()),
                    right: label(other.currency()),
                })
            }
            (Some(c), None) | (None, Some(c)) => Some(c.clone()),
            (None, None) => None,
        };

        let amount = self
            .amount
            .checked_mul(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Value::new(amount, currency))
    }

    /// Absolute value, same currency.
    pub fn abs(&self) -> Value {
        Value::new(self.amount.abs(), self.currency.clone())
    }

    /// Negated value, same currency.
    pub fn neg(&self) -> Value {
        Value::new(-self.amount, self.currency.clone())
    }

    /// `-1` if negative, `0` if zero, `1` if positive.
    pub fn sign(&self) -> i32 {
        if self.amount.is_zero() {
            0
        } else if self.amount.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns `true` if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.sign() == 1
    }

    /// Returns `true` if the amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.sign() == -1
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Compares amounts, failing if the currencies differ.
    pub fn try_cmp(&self, other: &Value) -> Result<Ordering> {
        self.check_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Like [`Value::equal`], but reports a currency mismatch as an error
    /// instead of `false`.
    pub fn try_equal(&self, other: &Value) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    pub fn try_greater_than(&self, other: &Value) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    pub fn try_greater_than_or_equal(&self, other: &Value) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }

    pub fn try_less_than(&self, other: &Value) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn try_less_than_or_equal(&self, other: &Value) -> Result<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }

    /// Returns `true` for equal amounts in the same currency.
    pub fn equal(&self, other: &Value) -> bool {
        self.try_equal(other).unwrap_or(false)
    }

    /// `false` if the currencies differ.
    pub fn greater_than(&self, other: &Value) -> bool {
        self.try_greater_than(other).unwrap_or(false)
    }

    /// `false` if the currencies differ.
    pub fn greater_than_or_equal(&self, other: &Value) -> bool {
        self.try_greater_than_or_equal(other).unwrap_or(false)
    }

    /// `false` if the currencies differ.
    pub fn less_than(&self, other: &Value) -> bool {
        self.try_less_than(other).unwrap_or(false)
    }

    /// `false` if the currencies differ.
    pub fn less_than_or_equal(&self, other: &Value) -> bool {
        self.try_less_than_or_equal(other).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Value {
        Value::must_parse(s)
    }

    #[test]
    fn test_sum() {
        assert_eq!(
            sum(&v("12.34 ISO4217-EUR"), [&v("12.34 ISO4217-EUR")]).unwrap(),
            v("24.68 ISO4217-EUR")
        );
        assert!(sum(&v("12.34 ISO4217-EUR"), [&v("12.34")]).is_err());
        assert_eq!(
            sum(&v("12.34 ISO4217-EUR"), std::iter::empty()).unwrap(),
            v("12.34 ISO4217-EUR")
        );
        assert_eq!(sum(&v("-12.34"), [&v("12.34")]).unwrap(), v("0"));
        assert_eq!(
            must_sum(&v("-12.34"), [&v("12.34"), &v("12.34")]),
            v("12.34")
        );
    }

    #[test]
    fn test_add() {
        assert_eq!(v("0").add(&v("-1")).unwrap(), v("-1"));
        assert_eq!(
            v("1 ISO4217-EUR").add(&v("-1 ISO4217-EUR")).unwrap(),
            v("0 ISO4217-EUR")
        );
        assert_eq!(
            v("1").add(&v("-0.0000000000000000000000000001")).unwrap(),
            v("0.9999999999999999999999999999")
        );
        assert!(v("0").add(&v("0 ISO4217-EUR")).is_err());
    }

    #[test]
    fn test_sub() {
        assert_eq!(v("0").sub(&v("-1")).unwrap(), v("1"));
        assert_eq!(
            v("1 ISO4217-EUR").sub(&v("-1 ISO4217-EUR")).unwrap(),
            v("2 ISO4217-EUR")
        );
        assert!(v("0").sub(&v("0 ISO4217-EUR")).is_err());
    }

    #[test]
    fn test_mismatch_is_symmetric() {
        let eur = v("1 ISO4217-EUR");
        let usd = v("1 ISO4217-USD");

        for (a, b) in [(&eur, &usd), (&usd, &eur)] {
            assert!(matches!(
                a.add(b),
                Err(MoneyError::DifferentCurrencies { .. })
            ));
            assert!(a.sub(b).is_err());
            assert!(a.try_equal(b).is_err());
            assert!(a.try_less_than(b).is_err());
            assert!(!a.equal(b));
        }
    }

    #[test]
    fn test_mismatch_names_both_sides() {
        let err = v("1 ISO4217-EUR").add(&v("1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The monetary values have two different currencies: ISO4217-EUR and no currency"
        );
    }

    #[test]
    fn test_mul() {
        assert_eq!(v("0").mul(&v("-1")).unwrap(), v("0"));
        assert_eq!(
            v("1 ISO4217-EUR").mul(&v("-1")).unwrap(),
            v("-1 ISO4217-EUR")
        );
        assert_eq!(
            v("1").mul(&v("-1 ISO4217-EUR")).unwrap(),
            v("-1 ISO4217-EUR")
        );
        assert!(matches!(
            v("0 ISO4217-EUR").mul(&v("0 ISO4217-EUR")),
            Err(MoneyError::CurrencySquared { .. })
        ));
        assert!(matches!(
            v("1 ISO4217-EUR").mul(&v("1 ISO4217-USD")),
            Err(MoneyError::DifferentCurrencies { .. })
        ));
    }

    #[test]
    fn test_unary() {
        assert_eq!(v("-1.234").abs(), v("1.234"));
        assert_eq!(v("1.234 ISO4217-EUR").abs(), v("1.234 ISO4217-EUR"));
        assert_eq!(v("1.234 ISO4217-EUR").neg(), v("-1.234 ISO4217-EUR"));
        assert_eq!(v("-1.234").neg(), v("1.234"));

        assert_eq!(v("0").sign(), 0);
        assert_eq!(v("-1.234").sign(), -1);
        assert_eq!(v("1.234 ISO4217-EUR").sign(), 1);

        assert!(v("1.234").is_positive());
        assert!(!v("0").is_positive());
        assert!(v("-1.234").is_negative());
        assert!(!v("0").is_negative());
        assert!(v("0").is_zero());
        assert!(v("0.000 ISO4217-EUR").is_zero());
    }

    #[test]
    fn test_comparisons() {
        let a = v("-1234567.89");

        assert!(a.try_greater_than(&v("-1234567.90")).unwrap());
        assert!(!a.try_greater_than(&v("-1234567.89")).unwrap());
        assert!(a.try_greater_than_or_equal(&v("-1234567.89")).unwrap());
        assert!(a.try_less_than(&v("-1234567.88")).unwrap());
        assert!(a.try_less_than_or_equal(&v("-1234567.89")).unwrap());
        assert!(!a.try_less_than_or_equal(&v("-1234567.90")).unwrap());
        assert!(a.try_equal(&v("-1234567.890")).unwrap());

        let eur = v("-1234567.89 ISO4217-EUR");
        assert!(eur.try_greater_than(&a).is_err());
        assert!(!eur.greater_than(&v("-1234567.90 ISO4217-USD")));
        assert!(!eur.greater_than_or_equal(&a));
        assert!(!eur.less_than(&a));
        assert!(!eur.less_than_or_equal(&a));
        assert!(eur.less_than(&v("0 ISO4217-EUR")));
    }
}
