use chrono::NaiveDate;
use kernel::model::id::BookingId;
use serde::{Deserialize, Serialize};

use crate::model::booking::ConflictResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    /// Excludes the booking being edited from the check.
    #[serde(default)]
    pub exclude_booking_id: Option<BookingId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
    pub conflict: Option<ConflictResponse>,
}
