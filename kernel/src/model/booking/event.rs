use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

use crate::model::booking::BookingStatus;
use crate::model::id::{BookingId, SpaceId};
use crate::model::slot::{PricingOverride, SlotConfiguration};
use crate::model::time::TimeOfDay;

pub struct CreateBooking {
    pub space_id: SpaceId,
    pub event_name: String,
    pub customer_name: String,
    pub event_date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub status: BookingStatus,
    pub config: SlotConfiguration,
    pub overrides: PricingOverride,
    pub total: Decimal,
    /// Lets the caller proceed past a blocking schedule conflict after an
    /// explicit confirmation.
    pub allow_conflict: bool,
}

pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub space_id: SpaceId,
    pub event_name: String,
    pub customer_name: String,
    pub event_date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub config: SlotConfiguration,
    pub overrides: PricingOverride,
    pub total: Decimal,
    pub allow_conflict: bool,
}

#[derive(new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
}
