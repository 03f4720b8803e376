//! Response DTOs for pricing API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::round_money;
use super::models::{PriceBreakdown, ServiceId};

/// Price for a customer over the requested range.
///
/// `price` is serialized as a JSON number rounded to two places.
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub currency: String,
}

impl PriceResponse {
    /// Round an engine total for the wire
    pub fn from_total(total: Decimal, currency: &str) -> Self {
        Self {
            price: round_money(total, 2),
            currency: currency.to_string(),
        }
    }
}

/// Per-service view of a calculation, for auditing a total
#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakdownResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub currency: String,
    pub services: BTreeMap<ServiceId, ServiceTotalResponse>,
    pub free_days_used: u32,
}

/// One service's share of the total
#[derive(Debug, Clone, Serialize)]
pub struct ServiceTotalResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl PriceBreakdownResponse {
    pub fn from_breakdown(breakdown: PriceBreakdown, currency: &str) -> Self {
        Self {
            price: round_money(breakdown.total, 2),
            currency: currency.to_string(),
            services: breakdown
                .per_service
                .into_iter()
                .map(|(service, amount)| {
                    (
                        service,
                        ServiceTotalResponse {
                            price: round_money(amount, 2),
                        },
                    )
                })
                .collect(),
            free_days_used: breakdown.free_days_used,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_response_is_numeric_and_rounded() {
        let response = PriceResponse::from_total(dec!(175.504), "€");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["price"], serde_json::json!(175.5));
        assert_eq!(json["currency"], "€");
    }

    #[test]
    fn test_breakdown_response_keys_by_service_name() {
        let mut breakdown = PriceBreakdown {
            free_days_used: 2,
            total: dec!(0.84),
            ..Default::default()
        };
        breakdown.per_service.insert(ServiceId::ServiceA, dec!(0.20));
        breakdown.per_service.insert(ServiceId::ServiceC, dec!(0.64));

        let json = serde_json::to_value(PriceBreakdownResponse::from_breakdown(breakdown, "€")).unwrap();
        assert_eq!(json["price"], serde_json::json!(0.84));
        assert_eq!(json["services"]["serviceA"]["price"], serde_json::json!(0.2));
        assert_eq!(json["services"]["serviceC"]["price"], serde_json::json!(0.64));
        assert_eq!(json["free_days_used"], 2);
    }
}
