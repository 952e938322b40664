//! Chilean peso formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are carried as `rust_decimal::Decimal`; these helpers only render.
//! CLP has no fraction digits, so full formatting rounds to whole pesos.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as full Chilean pesos with es-CL grouping,
/// e.g. `$21.500.000`.
#[must_use]
pub fn format_clp(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats an amount as compact Chilean pesos, the dashboard style:
/// `$21,5M`, `$4,5B`, `$500K`.
///
/// One decimal place, comma as the decimal separator, trailing zeros dropped.
#[must_use]
pub fn format_clp_compact(amount: Decimal) -> String {
    let negative = amount.is_sign_negative();
    let abs = amount.abs();

    let billion = Decimal::from(1_000_000_000_u64);
    let million = Decimal::from(1_000_000_u64);
    let thousand = Decimal::from(1_000_u64);

    let (scaled, suffix) = if abs >= billion {
        (abs / billion, "B")
    } else if abs >= million {
        (abs / million, "M")
    } else if abs >= thousand {
        (abs / thousand, "K")
    } else {
        (abs, "")
    };

    let value = scaled
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
        .replace('.', ",");

    if negative {
        format!("-${value}{suffix}")
    } else {
        format!("${value}{suffix}")
    }
}

/// Inserts a dot before every group of three digits, from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
