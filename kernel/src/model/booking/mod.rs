use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::model::id::{BookingId, SpaceId};
use crate::model::slot::{EventSlot, PricingOverride, SlotConfiguration};
use crate::model::time::TimeOfDay;

pub mod event;

/// Lifecycle status of a booking, ordered from first contact to completion.
/// `Cancelled` sits outside the progression and is ignored by conflict checks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Inquiry,
    Prospect,
    Tentative,
    ConfirmedDepositPaid,
    ConfirmedFullyPaid,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Statuses whose schedule conflicts block a new booking. Kept as an
    /// explicit allow-list rather than inferred from ordering.
    pub const BLOCKING: [BookingStatus; 2] =
        [BookingStatus::ConfirmedDepositPaid, BookingStatus::ConfirmedFullyPaid];

    pub fn is_blocking(self) -> bool {
        Self::BLOCKING.contains(&self)
    }
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
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
}

impl Booking {
    pub fn slot(&self) -> EventSlot {
        EventSlot {
            space_id: self.space_id,
            event_date: self.event_date,
            start: self.start,
            end: self.end,
        }
    }
}
