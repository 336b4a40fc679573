//! Schedule conflict detection.
//!
//! One shared pure function for every caller that needs to know whether a
//! candidate slot collides with an existing booking in the same space on the
//! same date. Overlap is tested on half-open intervals, so a booking that
//! ends exactly when another starts is not a conflict.

use serde::Serialize;
use strum::Display;

use crate::model::booking::{Booking, BookingStatus};
use crate::model::id::BookingId;
use crate::model::slot::EventSlot;

/// How severe a schedule conflict is for the caller. Blocking conflicts come
/// from confirmed, paid bookings and should prevent saving without an
/// explicit override; anything else is a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConflictSeverity {
    Blocking,
    Warning,
}

impl From<BookingStatus> for ConflictSeverity {
    fn from(status: BookingStatus) -> Self {
        if status.is_blocking() {
            Self::Blocking
        } else {
            Self::Warning
        }
    }
}

#[derive(Debug)]
pub struct Availability<'a> {
    pub available: bool,
    pub conflict: Option<&'a Booking>,
}

impl Availability<'_> {
    pub fn severity(&self) -> Option<ConflictSeverity> {
        self.conflict.map(|b| b.status.into())
    }
}

/// Checks a candidate slot against existing bookings.
///
/// Cancelled bookings, other spaces, other calendar dates, and the booking
/// named by `exclude` (the one being edited) are skipped. When several
/// bookings conflict, the most severe one is surfaced first, blocking status
/// before warnings and earlier start time within the same severity.
///
/// An empty booking list is trivially available; callers must enforce that a
/// space and date were actually chosen before reading that as a guarantee.
pub fn check_availability<'a>(
    slot: &EventSlot,
    existing: &'a [Booking],
    exclude: Option<BookingId>,
) -> Availability<'a> {
    let conflict = existing
        .iter()
        .filter(|b| exclude != Some(b.booking_id))
        .filter(|b| b.status != BookingStatus::Cancelled)
        .filter(|b| b.space_id == slot.space_id)
        .filter(|b| b.event_date == slot.event_date)
        .filter(|b| slot.start < b.end && slot.end > b.start)
        .min_by_key(|b| (!b.status.is_blocking(), b.start));

    Availability {
        available: conflict.is_none(),
        conflict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::SpaceId;
    use crate::model::slot::{PricingOverride, SlotConfiguration};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    fn booking(
        space_id: SpaceId,
        day: u32,
        start: &str,
        end: &str,
        status: BookingStatus,
    ) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            space_id,
            event_name: "Reception".into(),
            customer_name: "Alvarez".into(),
            event_date: date(day),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            status,
            config: SlotConfiguration::default(),
            overrides: PricingOverride::default(),
            total: Decimal::ZERO,
        }
    }

    fn slot(space_id: SpaceId, day: u32, start: &str, end: &str) -> EventSlot {
        EventSlot {
            space_id,
            event_date: date(day),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn touching_boundary_is_not_a_conflict() {
        let space = SpaceId::new();
        let existing = vec![booking(space, 14, "12:00", "14:00", BookingStatus::Tentative)];

        let result = check_availability(&slot(space, 14, "10:00", "12:00"), &existing, None);
        assert!(result.available);
        assert!(result.conflict.is_none());
    }

    #[test]
    fn one_minute_overlap_conflicts() {
        let space = SpaceId::new();
        let existing = vec![booking(space, 14, "12:00", "14:00", BookingStatus::Tentative)];

        let result = check_availability(&slot(space, 14, "10:00", "12:01"), &existing, None);
        assert!(!result.available);
        assert_eq!(result.severity(), Some(ConflictSeverity::Warning));
    }

    #[test]
    fn paid_statuses_block_others_warn() {
        let space = SpaceId::new();
        let candidate = slot(space, 14, "17:00", "22:00");

        let paid = vec![booking(
            space,
            14,
            "16:00",
            "18:00",
            BookingStatus::ConfirmedFullyPaid,
        )];
        let result = check_availability(&candidate, &paid, None);
        assert_eq!(result.severity(), Some(ConflictSeverity::Blocking));

        let inquiry = vec![booking(space, 14, "16:00", "18:00", BookingStatus::Inquiry)];
        let result = check_availability(&candidate, &inquiry, None);
        assert_eq!(result.severity(), Some(ConflictSeverity::Warning));
    }

    #[test]
    fn cancelled_and_other_space_and_other_date_are_ignored() {
        let space = SpaceId::new();
        let other_space = SpaceId::new();
        let existing = vec![
            booking(space, 14, "17:00", "22:00", BookingStatus::Cancelled),
            booking(other_space, 14, "17:00", "22:00", BookingStatus::ConfirmedFullyPaid),
            booking(space, 15, "17:00", "22:00", BookingStatus::ConfirmedFullyPaid),
        ];

        let result = check_availability(&slot(space, 14, "17:00", "22:00"), &existing, None);
        assert!(result.available);
    }

    #[test]
    fn editing_a_booking_skips_itself() {
        let space = SpaceId::new();
        let existing = vec![booking(
            space,
            14,
            "17:00",
            "22:00",
            BookingStatus::ConfirmedDepositPaid,
        )];
        let own_id = existing[0].booking_id;

        let candidate = slot(space, 14, "18:00", "21:00");
        assert!(!check_availability(&candidate, &existing, None).available);
        assert!(check_availability(&candidate, &existing, Some(own_id)).available);
    }

    #[test]
    fn most_severe_conflict_surfaces_first() {
        let space = SpaceId::new();
        let existing = vec![
            booking(space, 14, "09:00", "11:00", BookingStatus::Inquiry),
            booking(space, 14, "10:00", "12:00", BookingStatus::ConfirmedDepositPaid),
        ];

        let result = check_availability(&slot(space, 14, "08:00", "13:00"), &existing, None);
        let conflict = result.conflict.unwrap();
        assert_eq!(conflict.status, BookingStatus::ConfirmedDepositPaid);
        assert_eq!(result.severity(), Some(ConflictSeverity::Blocking));
    }

    #[test]
    fn equal_severity_tie_breaks_on_earliest_start() {
        let space = SpaceId::new();
        let existing = vec![
            booking(space, 14, "11:00", "13:00", BookingStatus::Prospect),
            booking(space, 14, "09:00", "10:30", BookingStatus::Tentative),
        ];

        let result = check_availability(&slot(space, 14, "08:00", "14:00"), &existing, None);
        assert_eq!(result.conflict.unwrap().start, "09:00".parse().unwrap());
    }

    #[test]
    fn empty_booking_list_is_trivially_available() {
        let result =
            check_availability(&slot(SpaceId::new(), 14, "10:00", "12:00"), &[], None);
        assert!(result.available);
    }
}
