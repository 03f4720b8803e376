//! Day-by-day pricing walk.
//!
//! Iterates every day of the range and, within a day, every service in
//! `ServiceId::ALL` order. This is O(days x services) and intentionally not
//! reduced to per-weekday counts: free-day consumption and discount windows
//! both depend on the exact day and service order.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::calculators::{day_count, days_inclusive, resolve_discount, resolve_price};
use super::catalog;
use super::models::{PriceBreakdown, PricingRequest, ServiceId};

/// Total cost for the request, unrounded.
///
/// Pure and deterministic; reads nothing but the request and the static
/// catalog. Input is assumed valid.
pub fn calculate(request: &PricingRequest) -> Decimal {
    calculate_breakdown(request).total
}

/// Full outcome of the pricing walk, including per-service totals and how
/// many free days were spent.
pub fn calculate_breakdown(request: &PricingRequest) -> PriceBreakdown {
    let mut breakdown = PriceBreakdown::default();
    let mut free_days_left = request.free_days;

    for day in days_inclusive(request.range_start, request.range_end) {
        for service in ServiceId::ALL {
            let Some(config) = request.service(service) else {
                continue;
            };
            let Some(start_date) = config.start_date else {
                continue;
            };
            if !catalog::is_chargeable_on(service, day) {
                continue;
            }
            if day < start_date {
                continue;
            }

            // A free day covers the whole day, so later services are not
            // evaluated either.
            if free_days_left > 0 {
                free_days_left -= 1;
                breakdown.free_days_used += 1;
                trace!(%day, %service, free_days_left, "Free day consumed");
                break;
            }

            let price = resolve_price(service, config.price);
            let discount = resolve_discount(day, config.discount.as_ref());
            let charge = price.saturating_mul(Decimal::ONE - discount);
            let running = breakdown.per_service.entry(service).or_insert(Decimal::ZERO);
            *running = running.saturating_add(charge);
        }
    }

    // Saturate rather than panic; callers bound prices and ranges well below this.
    breakdown.total = breakdown
        .per_service
        .values()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(*amount));

    debug!(
        range_start = %request.range_start,
        range_end = %request.range_end,
        days = day_count(request.range_start, request.range_end),
        free_days_used = breakdown.free_days_used,
        total = %breakdown.total,
        "Pricing walk complete"
    );

    breakdown
}
