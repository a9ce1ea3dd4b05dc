//! Splitting a value into parts without losing or double-counting units.
//!
//! A value is divided into `n` parts that are integer multiples of a smallest
//! unit. The parts always sum back to the original value exactly, and any two
//! parts differ by at most one smallest unit. The larger parts come first.

use crate::currency::label;
use crate::error::{MoneyError, Result};
use crate::value::Value;
use log::trace;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Returns `10^-decimal_places`, e.g. `0.01` for `2` or `100` for `-2`.
pub fn unit_for_decimals(decimal_places: i32) -> Result<Decimal> {
    let out_of_range = || MoneyError::DecimalPlacesOutOfRange(decimal_places);

    if decimal_places >= 0 {
        Decimal::try_new(1, decimal_places.unsigned_abs()).map_err(|_| out_of_range())
    } else {
        (0..decimal_places.unsigned_abs())
            .try_fold(Decimal::ONE, |unit, _| unit.checked_mul(Decimal::TEN))
            .ok_or_else(out_of_range)
    }
}

impl Value {
    /// The smallest unit of this value's currency, as a value of that
    /// currency.
    ///
    /// `None` if there is no currency, or the currency is infinitely
    /// divisible.
    pub fn smallest_unit(&self) -> Option<Value> {
        let currency = self.currency.as_ref()?;
        currency
            .smallest_unit()
            .filter(|unit| !unit.is_zero())
            .map(|unit| Value::new(unit, Some(currency.clone())))
    }

    /// Splits the value into `n` parts using the currency's smallest unit.
    ///
    /// ```
    /// use money_split::Value;
    ///
    /// let parts = Value::must_parse("-11.11 ISO4217-EUR").split(3).unwrap();
    /// let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
    /// assert_eq!(parts, ["-3.71 ISO4217-EUR", "-3.70 ISO4217-EUR", "-3.70 ISO4217-EUR"]);
    /// ```
    pub fn split(&self, n: i64) -> Result<Vec<Value>> {
        let unit = self
            .smallest_unit()
            .ok_or_else(|| MoneyError::NoSmallestUnit(label(self.currency())))?;
        self.split_with_smallest_unit(n, &unit)
    }

    /// Splits the value into `n` parts with a granularity of
    /// `10^-decimal_places`.
    pub fn split_with_decimals(&self, n: i64, decimal_places: i32) -> Result<Vec<Value>> {
        let unit = Value::new(unit_for_decimals(decimal_places)?, self.currency.clone());
        self.split_with_smallest_unit(n, &unit)
    }

    /// Splits the value into `n` parts that are multiples of `smallest_unit`.
    ///
    /// # Errors
    ///
    /// - `n` is zero or negative.
    /// - `smallest_unit` is zero or negative, or in another currency.
    /// - The value is not an exact multiple of `smallest_unit`.
    pub fn split_with_smallest_unit(
        &self,
        n: i64,
        smallest_unit: &Value,
    ) -> Result<Vec<Value>> {
        if n <= 0 {
            return Err(MoneyError::InvalidPartCount(n));
        }
        if smallest_unit.amount <= Decimal::ZERO {
            return Err(MoneyError::InvalidSmallestUnit(smallest_unit.to_string()));
        }
        self.check_same_currency(smallest_unit)?;

        // Signed like the value, so the unit count below is never negative.
        let unit = if self.amount < Decimal::ZERO {
            -smallest_unit.amount
        } else {
            smallest_unit.amount
        };

        let remainder = self.amount.checked_rem(unit).ok_or(MoneyError::Overflow)?;
        if !remainder.is_zero() {
            return Err(MoneyError::NotAMultiple {
                value: self.to_string(),
                unit: smallest_unit.to_string(),
            });
        }

        let units = self
            .amount
            .checked_div(unit)
            .ok_or(MoneyError::Overflow)?
            .trunc();
        let parts = Decimal::from(n);

        // Exact integer division: units are never negative here.
        let extra = units.checked_rem(parts).ok_or(MoneyError::Overflow)?;
        let base = units
            .checked_sub(extra)
            .and_then(|whole| whole.checked_div(parts))
            .ok_or(MoneyError::Overflow)?
            .trunc();

        let extra = extra.to_usize().ok_or(MoneyError::Overflow)?;
        let count = usize::try_from(n).map_err(|_| MoneyError::Overflow)?;
        trace!(
            "Splitting {} into {} parts: {} units, {} per part, {} extra",
            self,
            n,
            units,
            base,
            extra
        );

        let small = base.checked_mul(unit).ok_or(MoneyError::Overflow)?;
        let large = if extra > 0 {
            base.checked_add(Decimal::ONE)
                .and_then(|units| units.checked_mul(unit))
                .ok_or(MoneyError::Overflow)?
        } else {
            small
        };

        Ok((0..count)
            .map(|i| {
                let amount = if i < extra { large } else { small };
                Value::new(amount, self.currency.clone())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::tests::TestCurrency;
    use crate::math::sum;
    use rust_decimal_macros::dec;

    fn v(s: &str) -> Value {
        Value::must_parse(s)
    }

    fn strings(parts: &[Value]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_split_negative_eur() {
        let parts = v("-11.11 ISO4217-EUR").split(3).unwrap();
        assert_eq!(
            strings(&parts),
            ["-3.71 ISO4217-EUR", "-3.70 ISO4217-EUR", "-3.70 ISO4217-EUR"]
        );
    }

    #[test]
    fn test_split_with_decimals() {
        let parts = v("1").split_with_decimals(3, 2).unwrap();
        assert_eq!(strings(&parts), ["0.34", "0.33", "0.33"]);
    }

    #[test]
    fn test_split_with_negative_decimals() {
        let parts = v("1000").split_with_decimals(3, -2).unwrap();
        assert_eq!(
            parts.iter().map(|p| p.amount()).collect::<Vec<_>>(),
            [dec!(400), dec!(300), dec!(300)]
        );
    }

    #[test]
    fn test_split_even() {
        let parts = v("9.00 ISO4217-USD").split(3).unwrap();
        assert!(parts.iter().all(|p| p.amount() == dec!(3)));
    }

    #[test]
    fn test_split_zero() {
        let parts = v("0 ISO4217-EUR").split(4).unwrap();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(Value::is_zero));
    }

    #[test]
    fn test_split_fewer_units_than_parts() {
        let parts = v("0.02 ISO4217-EUR").split(5).unwrap();
        assert_eq!(
            parts.iter().map(|p| p.amount()).collect::<Vec<_>>(),
            [dec!(0.01), dec!(0.01), dec!(0), dec!(0), dec!(0)]
        );
    }

    #[test]
    fn test_split_sums_back() {
        let value = v("-1234567.89 ISO4217-EUR");
        for n in 1..=17 {
            let parts = value.split(n).unwrap();
            assert_eq!(parts.len() as i64, n);
            assert_eq!(sum(&parts[0], &parts[1..]).unwrap(), value);
        }
    }

    #[test]
    fn test_split_rejects_bad_part_count() {
        assert!(matches!(
            v("1").split_with_decimals(0, 2),
            Err(MoneyError::InvalidPartCount(0))
        ));
        assert!(matches!(
            v("1").split_with_decimals(-3, 2),
            Err(MoneyError::InvalidPartCount(-3))
        ));
    }

    #[test]
    fn test_split_rejects_bad_unit() {
        assert!(matches!(
            v("1").split_with_smallest_unit(2, &v("0")),
            Err(MoneyError::InvalidSmallestUnit(_))
        ));
        assert!(matches!(
            v("1").split_with_smallest_unit(2, &v("-0.01")),
            Err(MoneyError::InvalidSmallestUnit(_))
        ));
        assert!(matches!(
            v("1 ISO4217-EUR").split_with_smallest_unit(2, &v("0.01")),
            Err(MoneyError::DifferentCurrencies { .. })
        ));
        assert!(matches!(
            v("1 ISO4217-EUR").split_with_smallest_unit(2, &v("0.01 ISO4217-USD")),
            Err(MoneyError::DifferentCurrencies { .. })
        ));
    }

    #[test]
    fn test_split_rejects_non_multiple() {
        assert!(matches!(
            v("1.005 ISO4217-EUR").split(2),
            Err(MoneyError::NotAMultiple { .. })
        ));
        assert!(v("-0.5").split_with_decimals(2, 0).is_err());
    }

    #[test]
    fn test_split_without_smallest_unit() {
        assert!(matches!(
            v("1").split(2),
            Err(MoneyError::NoSmallestUnit(name)) if name == "no currency"
        ));
        assert!(matches!(
            v("1 ISO4217-XAU").split(2),
            Err(MoneyError::NoSmallestUnit(_))
        ));

        let mut divisible = TestCurrency::new("FOO", "DIV", -7);
        divisible.smallest_unit = Some(Decimal::ZERO);
        let value = Value::new(dec!(1), Some(divisible.shared()));
        assert!(value.smallest_unit().is_none());
        assert!(value.split(2).is_err());
    }

    #[test]
    fn test_split_with_custom_unit() {
        let parts = v("10 ISO4217-CHF")
            .split_with_smallest_unit(3, &v("0.05 ISO4217-CHF"))
            .unwrap();
        assert_eq!(
            parts.iter().map(|p| p.amount()).collect::<Vec<_>>(),
            [dec!(3.35), dec!(3.35), dec!(3.30)]
        );
    }

    #[test]
    fn test_unit_for_decimals_range() {
        assert_eq!(unit_for_decimals(0).unwrap(), dec!(1));
        assert_eq!(unit_for_decimals(4).unwrap(), dec!(0.0001));
        assert_eq!(unit_for_decimals(-3).unwrap(), dec!(1000));
        assert!(unit_for_decimals(28).is_ok());
        assert!(matches!(
            unit_for_decimals(29),
            Err(MoneyError::DecimalPlacesOutOfRange(29))
        ));
        assert_eq!(
            unit_for_decimals(-19).unwrap(),
            Decimal::from_i128_with_scale(10i128.pow(19), 0)
        );
        assert_eq!(
            unit_for_decimals(-28).unwrap(),
            Decimal::from_i128_with_scale(10i128.pow(28), 0)
        );
        assert!(matches!(
            unit_for_decimals(-29),
            Err(MoneyError::DecimalPlacesOutOfRange(-29))
        ));
        assert!(unit_for_decimals(i32::MIN).is_err());
    }

    #[test]
    fn test_split_at_decimal_range_limits() {
        for (amount, n) in [
            (Decimal::MAX, 1),
            (Decimal::MAX, 3),
            (Decimal::MAX, 4),
            (Decimal::MIN, 1),
            (Decimal::MIN, 3),
            (Decimal::MIN, 7),
        ] {
            let value = Value::new(amount, None);
            let parts = value.split_with_decimals(n, 0).unwrap();
            assert_eq!(parts.len() as i64, n);
            assert_eq!(sum(&parts[0], &parts[1..]).unwrap(), value);
        }

        let eur = v("792281625142643375935439503.35 ISO4217-EUR");
        assert_eq!(eur.split(1).unwrap(), [eur.clone()]);
        let parts = eur.split(4).unwrap();
        assert_eq!(sum(&parts[0], &parts[1..]).unwrap(), eur);
        assert_eq!(parts[0].amount() - parts[3].amount(), dec!(0.01));
    }

    #[test]
    fn test_split_reports_unit_count_overflow() {
        assert!(matches!(
            Value::new(Decimal::MAX, None).split_with_decimals(2, 1),
            Err(MoneyError::Overflow)
        ));
    }
}
