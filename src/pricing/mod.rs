//! Pricing engine module.
//!
//! Computes a customer's billing total over a date range from per-service
//! start dates, custom prices, discount windows and a shared pool of free
//! days. The engine is pure; the HTTP surface is a thin wrapper around it.

pub mod calculators;
pub mod catalog;
pub mod engine;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{resolve_discount, resolve_price, round_money};
pub use engine::{calculate, calculate_breakdown};
pub use models::{DiscountWindow, PriceBreakdown, PricingRequest, ServiceConfig, ServiceId};
pub use routes::router;
