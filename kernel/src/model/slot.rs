use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::catalog::PricingModel;
use crate::model::id::{PackageId, ServiceId, SpaceId};
use crate::model::time::TimeOfDay;

/// The per-event-instance selections made for one slot.
///
/// Guest count and quantities are clamped to at least 1 at the request
/// boundary; the pricing engine assumes already-clamped values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfiguration {
    pub package_id: Option<PackageId>,
    #[serde(default)]
    pub service_ids: Vec<ServiceId>,
    pub guest_count: u32,
    /// Overrides the package's catalog pricing model for this slot.
    /// Restricted to `Fixed` and `PerPerson` at the request boundary.
    #[serde(default)]
    pub package_model_override: Option<PricingModel>,
    /// Item quantity per selected service; missing entries default to 1.
    #[serde(default)]
    pub quantities: HashMap<ServiceId, u32>,
}

impl Default for SlotConfiguration {
    fn default() -> Self {
        Self {
            package_id: None,
            service_ids: Vec::new(),
            guest_count: 1,
            package_model_override: None,
            quantities: HashMap::new(),
        }
    }
}

/// Manual price substitutions for one slot. A present entry fully replaces
/// the catalog price; absence means the catalog price applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverride {
    #[serde(default)]
    pub package_price: Option<Decimal>,
    #[serde(default)]
    pub service_prices: HashMap<ServiceId, Decimal>,
}

/// A candidate (space, date, start, end) tuple being booked.
#[derive(Debug, Clone, Copy)]
pub struct EventSlot {
    pub space_id: SpaceId,
    pub event_date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl EventSlot {
    /// Event duration in fractional hours, floored at zero when the end
    /// precedes the start.
    pub fn duration_hours(&self) -> Decimal {
        let minutes = self.end.minutes().saturating_sub(self.start.minutes());
        Decimal::from(minutes) / Decimal::from(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn slot(start: &str, end: &str) -> EventSlot {
        EventSlot {
            space_id: SpaceId::new(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn duration_is_fractional_hours() {
        assert_eq!(slot("10:00", "12:00").duration_hours(), dec!(2));
        assert_eq!(slot("10:00", "11:30").duration_hours(), dec!(1.5));
    }

    #[test]
    fn inverted_interval_has_zero_duration() {
        assert_eq!(slot("18:00", "10:00").duration_hours(), Decimal::ZERO);
    }
}
