//! Built-in service catalog.
//!
//! Default prices and chargeable weekdays for every known service. Adding a
//! service means adding a `ServiceId` variant and a row here.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::ServiceId;

const WEEKDAYS: &[Weekday] = &[
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const EVERY_DAY: &[Weekday] = &[
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One row of the catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub default_price: Decimal,
    pub chargeable_weekdays: &'static [Weekday],
}

/// Rows in `ServiceId::ALL` order
pub static CATALOG: [CatalogEntry; 3] = [
    // ServiceA
    CatalogEntry {
        default_price: dec!(0.20),
        chargeable_weekdays: WEEKDAYS,
    },
    // ServiceB
    CatalogEntry {
        default_price: dec!(0.24),
        chargeable_weekdays: WEEKDAYS,
    },
    // ServiceC
    CatalogEntry {
        default_price: dec!(0.40),
        chargeable_weekdays: EVERY_DAY,
    },
];

/// Catalog row for a service
pub fn entry(service: ServiceId) -> &'static CatalogEntry {
    // Rows are laid out in declaration order of `ServiceId`.
    &CATALOG[service as usize]
}

/// Default per-day price for a service
pub fn default_price(service: ServiceId) -> Decimal {
    entry(service).default_price
}

/// Whether the service incurs any charge on the weekday of `date`
pub fn is_chargeable_on(service: ServiceId, date: NaiveDate) -> bool {
    entry(service).chargeable_weekdays.contains(&date.weekday())
}
