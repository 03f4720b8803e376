//! Core pricing calculation functions.
//!
//! Pure functions for pricing math: per-day discount lookup, per-day price
//! resolution, date walking and rounding. No I/O.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::catalog;
use super::models::{DiscountWindow, ServiceId};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use service_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(175.504), 2), dec!(175.50));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Effective start of a discount window with no start date
pub fn discount_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Effective end of a discount window with no end date
pub fn discount_horizon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2999, 1, 1).unwrap_or(NaiveDate::MAX)
}

/// Discount fraction in effect on `date`.
///
/// Returns zero when no discount is configured, when its amount is absent or
/// zero, or when `date` lies outside the window. Both window ends are
/// inclusive.
pub fn resolve_discount(date: NaiveDate, discount: Option<&DiscountWindow>) -> Decimal {
    let Some(window) = discount else {
        return Decimal::ZERO;
    };
    let amount = match window.amount {
        Some(amount) if !amount.is_zero() => amount,
        _ => return Decimal::ZERO,
    };

    let start = window.start_date.unwrap_or_else(discount_epoch);
    let end = window.end_date.unwrap_or_else(discount_horizon);

    if start <= date && date <= end {
        amount
    } else {
        Decimal::ZERO
    }
}

/// Per-day price for a service.
///
/// A present, non-zero override wins; otherwise the catalog default applies.
pub fn resolve_price(service: ServiceId, price_override: Option<Decimal>) -> Decimal {
    match price_override {
        Some(price) if !price.is_zero() => price,
        _ => catalog::default_price(service),
    }
}

/// Every calendar day from `start` to `end` inclusive, in order.
///
/// Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Number of days `days_inclusive` yields
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}
