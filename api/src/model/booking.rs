use chrono::NaiveDate;
use garde::Validate;
use kernel::availability::ConflictSeverity;
use kernel::model::booking::{Booking, BookingStatus};
use kernel::model::id::{BookingId, SpaceId};
use kernel::model::slot::{PricingOverride, SlotConfiguration};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::slot::{PricingOverrideRequest, SlotConfigurationRequest};

/// Times arrive as text and are parsed at the handler boundary; both
/// "17:00" and "5:00 PM" are accepted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(length(min = 1))]
    pub event_name: String,
    #[garde(length(min = 1))]
    pub customer_name: String,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(length(min = 1))]
    pub start: String,
    #[garde(length(min = 1))]
    pub end: String,
    /// New bookings default to the top of the pipeline.
    #[garde(skip)]
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[garde(dive)]
    pub config: SlotConfigurationRequest,
    #[garde(skip)]
    #[serde(default)]
    pub overrides: PricingOverrideRequest,
    #[garde(skip)]
    #[serde(default)]
    pub allow_conflict: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(length(min = 1))]
    pub event_name: String,
    #[garde(length(min = 1))]
    pub customer_name: String,
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
    #[garde(skip)]
    #[serde(default)]
    pub allow_conflict: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    #[garde(skip)]
    pub status: BookingStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub space_id: SpaceId,
    pub event_name: String,
    pub customer_name: String,
    pub event_date: NaiveDate,
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
    pub config: SlotConfiguration,
    pub overrides: PricingOverride,
    pub total: Decimal,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            space_id,
            event_name,
            customer_name,
            event_date,
            start,
            end,
            status,
            config,
            overrides,
            total,
        } = value;
        Self {
            booking_id,
            space_id,
            event_name,
            customer_name,
            event_date,
            start: start.to_string(),
            end: end.to_string(),
            status,
            config,
            overrides,
            total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

/// The existing booking a candidate slot collides with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResponse {
    pub booking_id: BookingId,
    pub event_name: String,
    pub customer_name: String,
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
    pub severity: ConflictSeverity,
}

impl From<&Booking> for ConflictResponse {
    fn from(value: &Booking) -> Self {
        Self {
            booking_id: value.booking_id,
            event_name: value.event_name.clone(),
            customer_name: value.customer_name.clone(),
            start: value.start.to_string(),
            end: value.end.to_string(),
            status: value.status,
            severity: value.status.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub booking_id: BookingId,
    pub total: Decimal,
    /// Present when the slot overlaps a non-blocking booking and the save
    /// went through anyway.
    pub warning: Option<ConflictResponse>,
}
