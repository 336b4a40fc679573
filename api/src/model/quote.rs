use chrono::NaiveDate;
use garde::Validate;
use kernel::model::id::SpaceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::slot::{PricingOverrideRequest, SlotConfigurationRequest};

/// A transient what-if quote. Nothing is persisted; the same engine prices
/// saved bookings.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(length(min = 1))]
    pub start: String,
    #[garde(length(min = 1))]
    pub end: String,
    #[garde(dive)]
    pub config: SlotConfigurationRequest,
    #[garde(skip)]
    #[serde(default)]
    pub overrides: PricingOverrideRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Exact engine output, unrounded.
    pub total: Decimal,
    /// Rounded to two decimal places for display.
    pub total_display: String,
    pub duration_hours: Decimal,
}

impl QuoteResponse {
    pub fn new(total: Decimal, duration_hours: Decimal) -> Self {
        Self {
            total,
            total_display: format_money(total),
            duration_hours,
        }
    }
}

pub(crate) fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_total_rounds_but_exact_total_does_not() {
        let response = QuoteResponse::new(dec!(333.333), dec!(1.5));
        assert_eq!(response.total, dec!(333.333));
        assert_eq!(response.total_display, "333.33");
    }

    #[test]
    fn display_total_pads_to_two_places() {
        assert_eq!(format_money(dec!(500)), "500.00");
        assert_eq!(format_money(dec!(12.5)), "12.50");
    }
}
