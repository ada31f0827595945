//! Decimal arithmetic helpers for monetary values.
//!
//! All money math in the engine goes through [`rust_decimal::Decimal`],
//! which carries 28-29 significant digits of precision; native binary floats
//! never touch monetary values. `Decimal` already provides add, subtract,
//! multiply, divide, modulo, and comparisons through its operator impls, so
//! this module supplies the operations the type does not: half-up and
//! directional rounding to N places, percentage-of-whole, zero-safe
//! division, and fixed currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// The number of fractional digits carried by monetary amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a value to `places` fractional digits, half-up.
///
/// Midpoints round away from zero, so `round_to(2.345, 2)` is `2.35`.
///
/// # Example
///
/// ```
/// use split_engine::allocation::round_to;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("3.3333333333").unwrap();
/// assert_eq!(round_to(value, 2), Decimal::from_str("3.33").unwrap());
/// ```
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to currency precision (2 places, half-up).
pub fn round_currency(value: Decimal) -> Decimal {
    round_to(value, CURRENCY_SCALE)
}

/// Rounds a value down (toward negative infinity) to `places` fractional digits.
pub fn floor_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::ToNegativeInfinity)
}

/// Rounds a value up (toward positive infinity) to `places` fractional digits.
pub fn ceil_to(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::ToPositiveInfinity)
}

/// Returns `part / whole * 100` rounded half-up to `places` digits.
///
/// A zero `whole` yields 0 rather than an error: "0 of 0" is a meaningful
/// allocation result (nothing to divide), not a failure.
///
/// # Example
///
/// ```
/// use split_engine::allocation::percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let part = Decimal::from_str("1").unwrap();
/// let whole = Decimal::from_str("3").unwrap();
/// assert_eq!(percentage(part, whole, 2), Decimal::from_str("33.33").unwrap());
/// assert_eq!(percentage(part, Decimal::ZERO, 2), Decimal::ZERO);
/// ```
pub fn percentage(part: Decimal, whole: Decimal, places: u32) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    round_to(part / whole * Decimal::ONE_HUNDRED, places)
}

/// Full-precision division that yields 0 for a zero denominator.
///
/// Used wherever a proportional share is taken of a possibly-empty whole.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator / denominator
}

/// Renders a value with exactly two fractional digits.
///
/// # Example
///
/// ```
/// use split_engine::allocation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("3.5").unwrap();
/// assert_eq!(format_currency(value), "3.50");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}
