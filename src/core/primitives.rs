use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ForecastError, ForecastResult};

/// Number of decimals used for every point display string.
pub const DISPLAY_PRECISION: usize = 2;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ForecastResult<f64> {
    value.to_f64().ok_or_else(|| {
        ForecastError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn f64_to_decimal(value: f64, field_name: &str) -> ForecastResult<Decimal> {
    if !value.is_finite() {
        return Err(ForecastError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        ForecastError::InvalidData(format!("{field_name} cannot be represented as decimal"))
    })
}

/// Renders a tick value with the fixed display precision (`4.5` -> `"4.50"`).
///
/// Exact halves round away from zero (`0.125` -> `"0.13"`). Rounding works on
/// the exact binary value, so `2.675` (stored just below the half) gives
/// `"2.67"`. Values outside the decimal range fall back to float formatting.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(
                DISPLAY_PRECISION as u32,
                RoundingStrategy::MidpointAwayFromZero,
            );
            format!("{:.*}", DISPLAY_PRECISION, rounded)
        }
        None => format!("{:.*}", DISPLAY_PRECISION, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_fixed_pads_to_two_decimals() {
        assert_eq!(format_fixed(4.5), "4.50");
        assert_eq!(format_fixed(0.0), "0.00");
        assert_eq!(format_fixed(5.25), "5.25");
    }

    #[test]
    fn format_fixed_rounds_exact_halves_away_from_zero() {
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(2.625), "2.63");
        assert_eq!(format_fixed(-0.125), "-0.13");
        assert_eq!(format_fixed(2.675), "2.67");
    }

    #[test]
    fn non_finite_values_are_not_converted() {
        assert!(f64_to_decimal(f64::NAN, "value").is_err());
        assert!(f64_to_decimal(f64::INFINITY, "value").is_err());
    }
}
