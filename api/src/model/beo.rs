use chrono::NaiveDate;
use kernel::model::booking::BookingStatus;
use kernel::model::catalog::PricingModel;
use kernel::model::id::BookingId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Banquet Event Order: the single-document handoff given to operations
/// staff for one booking.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeoResponse {
    pub booking_id: BookingId,
    pub event_name: String,
    pub customer_name: String,
    pub event_date: NaiveDate,
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
    pub space_name: String,
    pub guest_count: u32,
    pub package: Option<BeoPackageLine>,
    pub services: Vec<BeoServiceLine>,
    pub total: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeoPackageLine {
    pub name: String,
    pub pricing_model: PricingModel,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Included services appear with a zero amount so the kitchen still sees
/// them on the sheet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeoServiceLine {
    pub name: String,
    pub pricing_model: PricingModel,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub amount: Decimal,
    pub included_in_package: bool,
}
