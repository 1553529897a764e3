//! Percentage normalization.
//!
//! Percentage goals keep every value as a fraction of 1 (85 % is stored as
//! 0.85). The only place that divides on the way in or multiplies on the way
//! out is this module.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValueError {
    #[error("No se permiten valores negativos.")]
    Negative,

    #[error("No puede ser mayor a 100 cuando porcentajes está activo.")]
    AbovePercentCeiling,

    #[error("El valor debe ser menor a 10.000.000.")]
    TooLarge,

    #[error("Se permiten como máximo 4 decimales.")]
    TooManyDecimals,
}

/// Stored columns hold 11 digits with 4 of them decimal
pub const MAX_DECIMAL_PLACES: u32 = 4;
pub const MAX_INTEGER_DIGITS: u32 = 7;

/// Check a user-typed value before it is stored
pub fn validate_input(value: Decimal, percentage: bool) -> Result<(), InputValueError> {
    if value < Decimal::ZERO {
        return Err(InputValueError::Negative);
    }
    if percentage && value > Decimal::ONE_HUNDRED {
        return Err(InputValueError::AbovePercentCeiling);
    }
    if value >= Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS)) {
        return Err(InputValueError::TooLarge);
    }
    if value.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(InputValueError::TooManyDecimals);
    }
    Ok(())
}

/// User-typed value → stored value. No rounding.
pub fn from_input(value: Decimal, percentage: bool) -> Decimal {
    if percentage {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    }
}

/// Stored value → display value with exactly two decimals
pub fn to_display(stored: Decimal, percentage: bool) -> Decimal {
    let value = if percentage {
        stored
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or(if stored < Decimal::ZERO { Decimal::MIN } else { Decimal::MAX })
    } else {
        stored
    };
    quantize(value)
}

/// Sum that saturates at `Decimal::MAX` instead of overflowing
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    for value in values {
        match total.checked_add(value) {
            Some(next) => total = next,
            None => {
                tracing::warn!("Progress sum overflowed, capping at the largest decimal");
                return if value < Decimal::ZERO { Decimal::MIN } else { Decimal::MAX };
            }
        }
    }
    total
}

/// Two decimals, half-even
pub fn quantize(value: Decimal) -> Decimal {
    quantize_dp(value, 2)
}

pub fn quantize_dp(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    rounded
}

/// "45.00 %" for percentage goals, "95.00" otherwise
pub fn format_display(stored: Decimal, percentage: bool) -> String {
    let value = to_display(stored, percentage);
    if percentage {
        format!("{} %", value)
    } else {
        format!("{}", value)
    }
}

/// Same as [`format_display`] with "-" for missing values
pub fn format_optional(stored: Option<Decimal>, percentage: bool) -> String {
    match stored {
        Some(value) => format_display(value, percentage),
        None => "-".to_string(),
    }
}

/// Inverse of [`format_display`], in display units
pub fn parse_display(text: &str) -> Option<Decimal> {
    let trimmed = text.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}

/// part / whole × 100; zero when `whole` is not positive, `Decimal::MAX`
/// when the ratio does not fit
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

pub fn clamp_percent(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_input_divides_only_percentages() {
        assert_eq!(from_input(dec!(85), true), dec!(0.85));
        assert_eq!(from_input(dec!(85), false), dec!(85));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(dec!(0.45), true), "45.00 %");
        assert_eq!(format_display(dec!(95), false), "95.00");
        assert_eq!(format_display(dec!(0.8), true), "80.00 %");
        assert_eq!(format_optional(None, true), "-");
    }

    #[test]
    fn test_quantize_is_half_even() {
        assert_eq!(quantize(dec!(1.005)), dec!(1.00));
        assert_eq!(quantize(dec!(1.015)), dec!(1.02));
        assert_eq!(quantize(dec!(3)).to_string(), "3.00");
    }

    #[test]
    fn test_display_round_trip_within_tolerance() {
        for stored in [dec!(0.1234), dec!(0.12345), dec!(0.5), dec!(0.999), dec!(0.0001)] {
            let shown = format_display(stored, true);
            let parsed = parse_display(&shown).expect("displayed value parses");
            assert_eq!(parsed, quantize(stored * dec!(100)));
            let recovered = from_input(parsed, true);
            assert!((recovered - stored).abs() <= dec!(0.01), "{shown} -> {recovered}");
        }
    }

    #[test]
    fn test_ratio_percent_never_divides_by_zero() {
        assert_eq!(ratio_percent(dec!(5), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio_percent(dec!(0.45), dec!(0.80)), dec!(56.25));
        assert_eq!(ratio_percent(dec!(150), dec!(100)), dec!(150));
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(validate_input(dec!(-1), false), Err(InputValueError::Negative));
        assert_eq!(
            validate_input(dec!(100.5), true),
            Err(InputValueError::AbovePercentCeiling)
        );
        assert!(validate_input(dec!(100.5), false).is_ok());
        assert!(validate_input(dec!(0), true).is_ok());
    }

    #[test]
    fn test_validate_input_respects_column_limits() {
        assert_eq!(
            validate_input(dec!(50000000000000000000000000000), false),
            Err(InputValueError::TooLarge)
        );
        assert_eq!(validate_input(dec!(10000000), false), Err(InputValueError::TooLarge));
        assert!(validate_input(dec!(9999999.9999), false).is_ok());
        assert_eq!(
            validate_input(dec!(1.23456), false),
            Err(InputValueError::TooManyDecimals)
        );
        assert!(validate_input(dec!(1.23450), false).is_ok());
        assert_eq!(
            validate_input(dec!(45.12345), true),
            Err(InputValueError::TooManyDecimals)
        );
    }

    #[test]
    fn test_saturating_sum_caps_instead_of_overflowing() {
        let huge = dec!(50000000000000000000000000000);
        assert_eq!(saturating_sum([huge, huge]), Decimal::MAX);
        assert_eq!(saturating_sum([dec!(0.10), dec!(0.15)]), dec!(0.25));
        assert_eq!(saturating_sum(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_to_display_does_not_overflow_on_huge_fractions() {
        assert_eq!(to_display(Decimal::MAX, true), quantize(Decimal::MAX));
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(dec!(150)), dec!(100));
        assert_eq!(clamp_percent(dec!(-3)), Decimal::ZERO);
        assert_eq!(clamp_percent(dec!(56.25)), dec!(56.25));
    }
}
