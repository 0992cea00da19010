use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a disclosure amount such as `"1,234,567"` or `" -2,500 "`.
///
/// Thousands separators and whitespace are stripped. Absent, empty, `"-"`
/// and non-numeric values all become `None`, which keeps "missing" distinct
/// from a reported zero.
pub fn parse_amount(raw: Option<&str>) -> Option<Decimal> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Growth of `current` over `previous` in percent.
///
/// `None` when either side is missing or `previous` is zero.
pub fn growth_rate(current: Option<Decimal>, previous: Option<Decimal>) -> Option<Decimal> {
    let current = current?;
    let previous = previous?;
    if previous.is_zero() {
        return None;
    }
    current
        .checked_sub(previous)?
        .checked_div(previous.abs())?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Sum that clamps to `Decimal::MAX` / `Decimal::MIN` instead of
/// overflowing.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, |total, value| {
        total.checked_add(value).unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    })
}

pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Convert back from the regression domain; non-finite values become zero.
pub fn f64_to_decimal(value: f64) -> Decimal {
    if value.is_finite() {
        Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_strips_separators() {
        assert_eq!(parse_amount(Some("1,234.5")), Some(dec!(1234.5)));
        assert_eq!(parse_amount(Some(" 258,935,494,000,000 ")), Some(dec!(258935494000000)));
        assert_eq!(parse_amount(Some("-1,000")), Some(dec!(-1000)));
        assert_eq!(parse_amount(Some("0")), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_amount_missing_values() {
        assert_eq!(parse_amount(None), None);
        assert_eq!(parse_amount(Some("")), None);
        assert_eq!(parse_amount(Some("   ")), None);
        assert_eq!(parse_amount(Some("-")), None);
        assert_eq!(parse_amount(Some(" - ")), None);
    }

    #[test]
    fn test_saturating_sum_clamps_on_overflow() {
        assert_eq!(saturating_sum([dec!(1.5), dec!(2), dec!(-0.5)]), dec!(3));
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
    }

    #[test]
    fn test_growth_rate_overflow_is_none() {
        assert_eq!(growth_rate(Some(Decimal::MAX), Some(dec!(-1))), None);
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        assert_eq!(parse_amount(Some("N/A")), None);
        assert_eq!(parse_amount(Some("12년 3개월")), None);
        assert_eq!(parse_amount(Some("1.2.3")), None);
    }

    #[test]
    fn test_parse_amount_scientific() {
        assert_eq!(parse_amount(Some("1.5e3")), Some(dec!(1500)));
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(growth_rate(Some(dec!(110)), Some(dec!(100))), Some(dec!(10)));
        assert_eq!(growth_rate(Some(dec!(90)), Some(dec!(100))), Some(dec!(-10)));
        // Negative base uses its magnitude.
        assert_eq!(growth_rate(Some(dec!(-50)), Some(dec!(-100))), Some(dec!(50)));
        assert_eq!(growth_rate(Some(dec!(10)), Some(Decimal::ZERO)), None);
        assert_eq!(growth_rate(None, Some(dec!(1))), None);
        assert_eq!(growth_rate(Some(dec!(1)), None), None);
    }

    #[test]
    fn test_f64_round_trip_guards() {
        assert_eq!(f64_to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(f64_to_decimal(f64::INFINITY), Decimal::ZERO);
        assert!((decimal_to_f64(dec!(131.25)) - 131.25).abs() < 1e-9);
    }
}
