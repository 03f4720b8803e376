//! Domain models for the pricing engine.
//!
//! These are the validated, typed inputs the engine walks over. The wire
//! format lives in `requests.rs` and is converted into these before any
//! calculation happens.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billable service identifier.
///
/// Declaration order is the per-day evaluation order, which decides which
/// service a free day is spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceId {
    ServiceA,
    ServiceB,
    ServiceC,
}

impl ServiceId {
    /// Every service, in evaluation order
    pub const ALL: [ServiceId; 3] = [ServiceId::ServiceA, ServiceId::ServiceB, ServiceId::ServiceC];

    /// Wire name of the service
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::ServiceA => "serviceA",
            ServiceId::ServiceB => "serviceB",
            ServiceId::ServiceC => "serviceC",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-bounded fractional discount for one service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountWindow {
    /// Fraction in `[0, 1)`; `None` or zero means no discount
    pub amount: Option<Decimal>,
    /// First day the discount applies (unbounded when `None`)
    pub start_date: Option<NaiveDate>,
    /// Last day the discount applies (unbounded when `None`)
    pub end_date: Option<NaiveDate>,
}

/// Per-customer configuration of a single service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    /// Service is never charged when `None`
    pub start_date: Option<NaiveDate>,
    /// Overrides the catalog default price per day
    pub price: Option<Decimal>,
    pub discount: Option<DiscountWindow>,
}

/// Everything needed to price one customer over one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    /// Shared pool of free service-days, not per service
    pub free_days: u32,
    pub services: BTreeMap<ServiceId, ServiceConfig>,
}

impl PricingRequest {
    /// Create a request with no services configured
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            range_start,
            range_end,
            free_days: 0,
            services: BTreeMap::new(),
        }
    }

    /// Builder-style setter for the free-day pool
    pub fn with_free_days(mut self, free_days: u32) -> Self {
        self.free_days = free_days;
        self
    }

    /// Builder-style setter for one service's configuration
    pub fn with_service(mut self, service: ServiceId, config: ServiceConfig) -> Self {
        self.services.insert(service, config);
        self
    }

    /// Configuration for a service, if any was supplied
    pub fn service(&self, service: ServiceId) -> Option<&ServiceConfig> {
        self.services.get(&service)
    }
}

/// Per-service outcome of one engine run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBreakdown {
    /// Running total per service; services never charged are absent
    pub per_service: BTreeMap<ServiceId, Decimal>,
    pub free_days_used: u32,
    /// Sum of `per_service`, unrounded
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_order_matches_declaration() {
        let mut ids = vec![ServiceId::ServiceC, ServiceId::ServiceA, ServiceId::ServiceB];
        ids.sort();
        assert_eq!(ids, ServiceId::ALL.to_vec());
    }

    #[test]
    fn test_service_id_wire_names() {
        assert_eq!(serde_json::to_string(&ServiceId::ServiceA).unwrap(), "\"serviceA\"");
        let parsed: ServiceId = serde_json::from_str("\"serviceC\"").unwrap();
        assert_eq!(parsed, ServiceId::ServiceC);
        assert_eq!(ServiceId::ServiceB.to_string(), "serviceB");
    }

    #[test]
    fn test_pricing_request_builder() {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2018, 1, 31).unwrap();
        let request = PricingRequest::new(start, end)
            .with_free_days(3)
            .with_service(
                ServiceId::ServiceB,
                ServiceConfig {
                    start_date: Some(start),
                    ..Default::default()
                },
            );

        assert_eq!(request.free_days, 3);
        assert!(request.service(ServiceId::ServiceA).is_none());
        assert_eq!(request.service(ServiceId::ServiceB).unwrap().start_date, Some(start));
    }
}
