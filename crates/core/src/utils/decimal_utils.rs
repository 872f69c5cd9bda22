//! Presentation-boundary rounding and formatting for money amounts.
//!
//! Stored amounts keep full precision; these helpers are the only place where
//! values are rounded to two decimals.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, DISPLAY_PERCENT_PRECISION};

/// Round an amount for display (half away from zero, two decimals).
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `$1234.50`, always two decimals.
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", round_for_display(amount))
}

/// `+$450.00` / `-$50.00`. Zero renders as a gain.
pub fn format_signed_amount(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        "+"
    };
    format!("{}${:.2}", sign, rounded.abs())
}

/// `+12.50%` / `-3.10%`.
pub fn format_signed_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(
        DISPLAY_PERCENT_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        "+"
    };
    format!("{}{:.2}%", sign, rounded.abs())
}

/// `(part / whole) * 100`, or zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}
