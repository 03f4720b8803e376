//! Request DTOs for pricing API endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::calculators::day_count;
use super::models::{DiscountWindow, PricingRequest, ServiceConfig, ServiceId};

/// Longest range accepted in one request, in days (a century)
pub const MAX_RANGE_DAYS: i64 = 36_600;

/// Highest per-day price override accepted
pub const MAX_DAILY_PRICE: Decimal = dec!(1000000000);

/// Request to calculate a customer's price over a date range
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    /// Customer id; only used for logging
    #[serde(default)]
    pub id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub service_start: BTreeMap<ServiceId, Option<NaiveDate>>,
    #[serde(default)]
    pub service_price: BTreeMap<ServiceId, Option<Decimal>>,
    #[serde(default)]
    pub discount: BTreeMap<ServiceId, Option<DiscountRequest>>,
    #[serde(default)]
    pub free_days: u32,
}

/// Discount for one service in the request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscountRequest {
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl CalculatePriceRequest {
    /// Check the request before it reaches the engine.
    ///
    /// Returns every problem found rather than stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.start_date > self.end_date {
            errors.push(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            ));
        }

        let days = day_count(self.start_date, self.end_date);
        if days > MAX_RANGE_DAYS {
            errors.push(format!(
                "range of {} days exceeds the maximum of {} days",
                days, MAX_RANGE_DAYS
            ));
        }

        for (service, price) in &self.service_price {
            match price {
                Some(p) if *p < Decimal::ZERO => {
                    errors.push(format!("service_price.{} must not be negative", service));
                }
                Some(p) if *p > MAX_DAILY_PRICE => {
                    errors.push(format!(
                        "service_price.{} must not exceed {}, got {}",
                        service, MAX_DAILY_PRICE, p
                    ));
                }
                _ => {}
            }
        }

        for (service, discount) in &self.discount {
            let Some(discount) = discount else {
                continue;
            };
            if let Some(amount) = discount.amount {
                if amount < Decimal::ZERO || amount >= Decimal::ONE {
                    errors.push(format!(
                        "discount.{}.amount must be in [0, 1), got {}",
                        service, amount
                    ));
                }
            }
            if let (Some(start), Some(end)) = (discount.start_date, discount.end_date) {
                if start > end {
                    errors.push(format!(
                        "discount.{}.start_date {} is after end_date {}",
                        service, start, end
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Convert into the engine's input, keeping only services that have any
    /// configuration at all
    pub fn into_pricing_request(self) -> PricingRequest {
        let mut request =
            PricingRequest::new(self.start_date, self.end_date).with_free_days(self.free_days);

        for service in ServiceId::ALL {
            let start_date = self.service_start.get(&service).copied().flatten();
            let price = self.service_price.get(&service).copied().flatten();
            let discount = self
                .discount
                .get(&service)
                .cloned()
                .flatten()
                .map(DiscountWindow::from);

            if start_date.is_none() && price.is_none() && discount.is_none() {
                continue;
            }

            request = request.with_service(
                service,
                ServiceConfig {
                    start_date,
                    price,
                    discount,
                },
            );
        }

        request
    }
}

impl From<DiscountRequest> for DiscountWindow {
    fn from(discount: DiscountRequest) -> Self {
        DiscountWindow {
            amount: discount.amount,
            start_date: discount.start_date,
            end_date: discount.end_date,
        }
    }
}
