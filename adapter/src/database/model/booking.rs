use chrono::NaiveDate;
use kernel::model::booking::{Booking, BookingStatus};
use kernel::model::time::TimeOfDay;
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: Uuid,
    pub space_id: Uuid,
    pub event_name: String,
    pub customer_name: String,
    pub event_date: NaiveDate,
    /// Minutes since midnight, matching the kernel representation.
    pub start_time: i16,
    pub end_time: i16,
    pub status: String,
    pub config: serde_json::Value,
    pub price_overrides: serde_json::Value,
    pub total: Decimal,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            space_id,
            event_name,
            customer_name,
            event_date,
            start_time,
            end_time,
            status,
            config,
            price_overrides,
            total,
        } = value;
        let status: BookingStatus = status
            .parse()
            .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {status}")))?;
        let config = serde_json::from_value(config)
            .map_err(|e| AppError::ConversionEntityError(format!("broken slot configuration: {e}")))?;
        let overrides = serde_json::from_value(price_overrides)
            .map_err(|e| AppError::ConversionEntityError(format!("broken pricing override: {e}")))?;
        Ok(Booking {
            booking_id: booking_id.into(),
            space_id: space_id.into(),
            event_name,
            customer_name,
            event_date,
            start: TimeOfDay::from_minutes(start_time.max(0) as u16),
            end: TimeOfDay::from_minutes(end_time.max(0) as u16),
            status,
            config,
            overrides,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::ServiceId;
    use kernel::model::slot::{PricingOverride, SlotConfiguration};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn row_converts_to_kernel_booking() {
        let service_id = ServiceId::new();
        let config = SlotConfiguration {
            service_ids: vec![service_id],
            guest_count: 80,
            quantities: [(service_id, 3)].into(),
            ..Default::default()
        };
        let overrides = PricingOverride {
            package_price: None,
            service_prices: [(service_id, dec!(12.50))].into(),
        };
        let row = BookingRow {
            booking_id: Uuid::new_v4(),
            space_id: Uuid::new_v4(),
            event_name: "Summit".into(),
            customer_name: "Okafor".into(),
            event_date: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            start_time: 17 * 60,
            end_time: 22 * 60,
            status: "confirmed_deposit_paid".into(),
            config: serde_json::to_value(&config).unwrap(),
            price_overrides: serde_json::to_value(&overrides).unwrap(),
            total: dec!(37.50),
        };

        let booking = Booking::try_from(row).unwrap();
        assert_eq!(booking.status, BookingStatus::ConfirmedDepositPaid);
        assert_eq!(booking.start.to_string(), "17:00");
        assert_eq!(booking.config.guest_count, 80);
        assert_eq!(
            booking.overrides.service_prices.get(&service_id),
            Some(&dec!(12.50))
        );
    }

    #[test]
    fn unknown_status_is_a_conversion_error() {
        let row = BookingRow {
            booking_id: Uuid::new_v4(),
            space_id: Uuid::new_v4(),
            event_name: String::new(),
            customer_name: String::new(),
            event_date: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            start_time: 0,
            end_time: 60,
            status: "paid_in_goats".into(),
            config: json!({ "guestCount": 1 }),
            price_overrides: json!({}),
            total: Decimal::ZERO,
        };

        assert!(Booking::try_from(row).is_err());
    }
}
