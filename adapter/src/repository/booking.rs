use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::booking::{
    event::{CancelBooking, CreateBooking, UpdateBooking, UpdateBookingStatus},
    Booking, BookingStatus,
};
use kernel::model::id::{BookingId, SpaceId};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

const BOOKING_COLUMNS: &str = r#"
    booking_id, space_id, event_name, customer_name, event_date,
    start_time, end_time, status, config, price_overrides, total
"#;

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The pre-checks and the insert must observe a consistent snapshot.
        self.set_transaction_serializable(&mut tx).await?;

        {
            let space_row: Option<(bool,)> =
                sqlx::query_as("SELECT is_active FROM spaces WHERE space_id = $1")
                    .bind(event.space_id.raw())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;

            let Some((is_active,)) = space_row else {
                return Err(AppError::EntityNotFound(format!(
                    "space ({}) was not found",
                    event.space_id
                )));
            };
            if !is_active {
                return Err(AppError::UnprocessableEntity(format!(
                    "space ({}) is not currently bookable",
                    event.space_id
                )));
            }

            if !event.allow_conflict {
                self.guard_blocking_overlap(
                    &mut tx,
                    event.space_id,
                    event.event_date,
                    event.start.minutes() as i16,
                    event.end.minutes() as i16,
                    None,
                )
                .await?;
            }
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, space_id, event_name, customer_name, event_date,
                 start_time, end_time, status, config, price_overrides, total)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(booking_id.raw())
        .bind(event.space_id.raw())
        .bind(&event.event_name)
        .bind(&event.customer_name)
        .bind(event.event_date)
        .bind(event.start.minutes() as i16)
        .bind(event.end.minutes() as i16)
        .bind(event.status.to_string())
        .bind(serde_json::to_value(&event.config).map_err(to_conversion_error)?)
        .bind(serde_json::to_value(&event.overrides).map_err(to_conversion_error)?)
        .bind(event.total)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                ORDER BY event_date ASC, start_time ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                WHERE booking_id = $1
            "#
        ))
        .bind(booking_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_space_and_date(
        &self,
        space_id: SpaceId,
        event_date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings
                WHERE space_id = $1 AND event_date = $2
                ORDER BY start_time ASC
            "#
        ))
        .bind(space_id.raw())
        .bind(event_date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.set_transaction_serializable(&mut tx).await?;

        if !event.allow_conflict {
            // A booking being rescheduled never conflicts with itself.
            self.guard_blocking_overlap(
                &mut tx,
                event.space_id,
                event.event_date,
                event.start.minutes() as i16,
                event.end.minutes() as i16,
                Some(event.booking_id),
            )
            .await?;
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET space_id = $2,
                    event_name = $3,
                    customer_name = $4,
                    event_date = $5,
                    start_time = $6,
                    end_time = $7,
                    config = $8,
                    price_overrides = $9,
                    total = $10
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id.raw())
        .bind(event.space_id.raw())
        .bind(&event.event_name)
        .bind(&event.customer_name)
        .bind(event.event_date)
        .bind(event.start.minutes() as i16)
        .bind(event.end.minutes() as i16)
        .bind(serde_json::to_value(&event.config).map_err(to_conversion_error)?)
        .bind(serde_json::to_value(&event.overrides).map_err(to_conversion_error)?)
        .bind(event.total)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified booking not found".into()));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<()> {
        let res = sqlx::query("UPDATE bookings SET status = $2 WHERE booking_id = $1")
            .bind(event.booking_id.raw())
            .bind(event.status.to_string())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified booking not found".into()));
        }

        Ok(())
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        // Cancelled bookings stay on record; conflict checks skip them.
        let res = sqlx::query("UPDATE bookings SET status = $2 WHERE booking_id = $1")
            .bind(event.booking_id.raw())
            .bind(BookingStatus::Cancelled.to_string())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified booking not found".into()));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    /// Rejects when the candidate interval overlaps a confirmed, paid booking
    /// in the same space on the same date. Same half-open interval rule as
    /// `kernel::availability`: touching boundaries are permitted.
    async fn guard_blocking_overlap(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        space_id: SpaceId,
        event_date: NaiveDate,
        start_time: i16,
        end_time: i16,
        exclude: Option<BookingId>,
    ) -> AppResult<()> {
        let blocking: Vec<String> = BookingStatus::BLOCKING
            .iter()
            .map(|s| s.to_string())
            .collect();
        let overlap: Option<(Uuid,)> = sqlx::query_as(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE space_id = $1
                  AND event_date = $2
                  AND status = ANY($3)
                  AND start_time < $5
                  AND end_time > $4
                  AND ($6::uuid IS NULL OR booking_id <> $6)
                LIMIT 1
            "#,
        )
        .bind(space_id.raw())
        .bind(event_date)
        .bind(&blocking)
        .bind(start_time)
        .bind(end_time)
        .bind(exclude.map(|id| id.raw()))
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if overlap.is_some() {
            return Err(AppError::UnprocessableEntity(format!(
                "space ({space_id}) already has a confirmed booking in that time range"
            )));
        }

        Ok(())
    }
}

fn to_conversion_error(e: serde_json::Error) -> AppError {
    AppError::ConversionEntityError(e.to_string())
}
