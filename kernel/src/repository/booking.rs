use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::booking::{
    event::{CancelBooking, CreateBooking, UpdateBooking, UpdateBookingStatus},
    Booking,
};
use crate::model::id::{BookingId, SpaceId};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    /// Existing bookings feeding the conflict detector for one space/date.
    async fn find_by_space_and_date(
        &self,
        space_id: SpaceId,
        event_date: NaiveDate,
    ) -> AppResult<Vec<Booking>>;
    async fn update(&self, event: UpdateBooking) -> AppResult<()>;
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()>;
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;
}
