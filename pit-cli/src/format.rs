//! Display formatting for VND amounts, rates, and percentages.
//!
//! Amounts follow the vi-VN convention: whole dong, `.` between thousands.

use pit_core::calculations::common::round_to_dong;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const BILLION: Decimal = dec!(1000000000);
const MILLION: Decimal = dec!(1000000);

/// `30000000` → `30.000.000`, `-1255000.4` → `-1.255.000`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_dong(amount);
    let digits = rounded.abs().trunc().normalize().to_string();
    let grouped = group_thousands(&digits);

    if rounded < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Compact form for charts and summaries: `1.2 tỷ`, `30.0 tr`, or the full
/// amount below one million.
pub fn format_currency_short(amount: Decimal) -> String {
    let magnitude = amount.abs();
    if magnitude >= BILLION {
        format!("{} tỷ", one_decimal(amount / BILLION))
    } else if magnitude >= MILLION {
        format!("{} tr", one_decimal(amount / MILLION))
    } else {
        format_currency(amount)
    }
}

/// A rate fraction as a percentage: `0.015` → `1.5%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

/// A percentage value with two decimals: `3.6749` → `3.67%`.
pub fn format_percent(percent: Decimal) -> String {
    let mut value = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    format!("{value}%")
}

fn one_decimal(value: Decimal) -> String {
    let mut value = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(1);
    value.to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
