//! Monetary arithmetic helpers.
//!
//! All amounts and rates in the domain are `rust_decimal::Decimal`.
//! Accumulation is always done on exact values; rounding happens exactly
//! once, at the display edge, via [`round_display`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Displayed precision for monetary values (2 decimal places, half-up).
pub const DISPLAY_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01).
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a monetary value for display: 2 decimal places, midpoint away
/// from zero.
///
/// Never call this on intermediate values that feed further accumulation;
/// summing rounded line amounts compounds rounding error across lines.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Apply a percentage (0–100 scale) to a value, exact.
pub fn apply_percent(value: Decimal, percent: Decimal) -> Decimal {
    value * percent / Decimal::ONE_HUNDRED
}

/// Compare two monetary values for equality within [`MONEY_TOLERANCE`].
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
