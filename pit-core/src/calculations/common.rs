//! Common utility functions for tax calculations.
//!
//! Shared rounding and clamping helpers used by the insurance, bracket,
//! and solver modules.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole number of dong using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_to_dong;
///
/// assert_eq!(round_to_dong(dec!(12345.4)), dec!(12345));
/// assert_eq!(round_to_dong(dec!(12345.5)), dec!(12346));
/// assert_eq!(round_to_dong(dec!(-12345.5)), dec!(-12346));
/// ```
pub fn round_to_dong(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}
