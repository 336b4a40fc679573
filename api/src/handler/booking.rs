use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::availability::check_availability;
use kernel::model::booking::{
    event::{CancelBooking, CreateBooking, UpdateBooking, UpdateBookingStatus},
    BookingStatus,
};
use kernel::model::id::{BookingId, ServiceId};
use kernel::model::slot::{EventSlot, PricingOverride, SlotConfiguration};
use kernel::pricing::{compute_slot_total, price_slot};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::handler::quote::resolve_catalog;
use crate::model::beo::{BeoPackageLine, BeoResponse, BeoServiceLine};
use crate::model::booking::{
    BookingResponse, BookingsResponse, ConflictResponse, CreateBookingRequest,
    CreateBookingResponse, UpdateBookingRequest, UpdateBookingStatusRequest,
};
use crate::model::slot::parse_time;

pub async fn register_booking(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    req.validate(&())?;

    let CreateBookingRequest {
        space_id,
        event_name,
        customer_name,
        event_date,
        start,
        end,
        status,
        config,
        overrides,
        allow_conflict,
    } = req;
    let start = parse_time(&start)?;
    let end = parse_time(&end)?;
    if start >= end {
        return Err(AppError::UnprocessableEntity(
            "start time must precede end time".into(),
        ));
    }

    let config: SlotConfiguration = config.into();
    let overrides: PricingOverride = overrides.into();
    let slot = EventSlot {
        space_id,
        event_date,
        start,
        end,
    };

    let existing = registry
        .booking_repository()
        .find_by_space_and_date(space_id, event_date)
        .await?;
    let availability = check_availability(&slot, &existing, None);
    if let Some(conflict) = availability.conflict {
        if conflict.status.is_blocking() && !allow_conflict {
            return Err(AppError::UnprocessableEntity(format!(
                "slot conflicts with confirmed booking \"{}\" ({} to {})",
                conflict.event_name, conflict.start, conflict.end
            )));
        }
    }
    let warning = availability.conflict.map(ConflictResponse::from);

    let (package, services) = resolve_catalog(&registry, space_id, &config).await?;
    let total = compute_slot_total(
        &config,
        &overrides,
        package.as_ref(),
        &services,
        slot.duration_hours(),
    );

    let event = CreateBooking {
        space_id,
        event_name,
        customer_name,
        event_date,
        start,
        end,
        status: status.unwrap_or(BookingStatus::Inquiry),
        config,
        overrides,
        total,
        allow_conflict,
    };
    let booking_id = registry.booking_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            booking_id,
            total,
            warning,
        }),
    ))
}

pub async fn show_booking_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let items = registry
        .booking_repository()
        .find_all()
        .await?
        .into_iter()
        .map(BookingResponse::from)
        .collect();
    Ok(Json(BookingsResponse { items }))
}

pub async fn show_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .map(BookingResponse::from)
        .map(Json)
        .ok_or(AppError::EntityNotFound("booking not found".into()))
}

/// Full edit of a booking. The slot is re-checked for conflicts with the
/// booking itself excluded, and the total is recomputed from the edited
/// configuration.
pub async fn update_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<CreateBookingResponse>> {
    req.validate(&())?;

    let UpdateBookingRequest {
        space_id,
        event_name,
        customer_name,
        event_date,
        start,
        end,
        config,
        overrides,
        allow_conflict,
    } = req;
    let start = parse_time(&start)?;
    let end = parse_time(&end)?;
    if start >= end {
        return Err(AppError::UnprocessableEntity(
            "start time must precede end time".into(),
        ));
    }

    let config: SlotConfiguration = config.into();
    let overrides: PricingOverride = overrides.into();
    let slot = EventSlot {
        space_id,
        event_date,
        start,
        end,
    };

    let existing = registry
        .booking_repository()
        .find_by_space_and_date(space_id, event_date)
        .await?;
    let availability = check_availability(&slot, &existing, Some(booking_id));
    if let Some(conflict) = availability.conflict {
        if conflict.status.is_blocking() && !allow_conflict {
            return Err(AppError::UnprocessableEntity(format!(
                "slot conflicts with confirmed booking \"{}\" ({} to {})",
                conflict.event_name, conflict.start, conflict.end
            )));
        }
    }
    let warning = availability.conflict.map(ConflictResponse::from);

    let (package, services) = resolve_catalog(&registry, space_id, &config).await?;
    let total = compute_slot_total(
        &config,
        &overrides,
        package.as_ref(),
        &services,
        slot.duration_hours(),
    );

    let event = UpdateBooking {
        booking_id,
        space_id,
        event_name,
        customer_name,
        event_date,
        start,
        end,
        config,
        overrides,
        total,
        allow_conflict,
    };
    registry.booking_repository().update(event).await?;

    Ok(Json(CreateBookingResponse {
        booking_id,
        total,
        warning,
    }))
}

pub async fn update_booking_status(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .booking_repository()
        .update_status(UpdateBookingStatus::new(booking_id, req.status))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn cancel_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .booking_repository()
        .cancel(CancelBooking::new(booking_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Builds the Banquet Event Order sheet for one booking. Prices are
/// recomputed from the current catalog rather than read from the stored
/// total, so the sheet always reflects what the engine would charge today.
pub async fn show_booking_beo(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BeoResponse>> {
    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or(AppError::EntityNotFound("booking not found".into()))?;
    let space = registry
        .space_repository()
        .find_by_id(booking.space_id)
        .await?
        .ok_or(AppError::EntityNotFound("space not found".into()))?;

    // No sellable_in enforcement here: the booking may predate a later
    // tightening of the package's space restriction.
    let package = match booking.config.package_id {
        Some(package_id) => {
            registry
                .catalog_repository()
                .find_package_by_id(package_id)
                .await?
        }
        None => None,
    };
    let services = registry
        .catalog_repository()
        .find_services_by_ids(&booking.config.service_ids)
        .await?;

    let priced = price_slot(
        &booking.config,
        &booking.overrides,
        package.as_ref(),
        &services,
        booking.slot().duration_hours(),
    );

    let service_names: HashMap<ServiceId, &str> = services
        .iter()
        .map(|s| (s.service_id, s.name.as_str()))
        .collect();
    let package_line = priced.package.as_ref().and_then(|charge| {
        package.as_ref().map(|pkg| BeoPackageLine {
            name: pkg.name.clone(),
            pricing_model: charge.pricing_model,
            unit_price: charge.unit_price,
            amount: charge.amount,
        })
    });
    let service_lines = priced
        .services
        .iter()
        .map(|charge| BeoServiceLine {
            name: service_names
                .get(&charge.service_id)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            pricing_model: charge.pricing_model,
            unit_price: charge.unit_price,
            quantity: charge.quantity,
            amount: charge.amount,
            included_in_package: charge.included_in_package,
        })
        .collect();

    Ok(Json(BeoResponse {
        booking_id: booking.booking_id,
        event_name: booking.event_name,
        customer_name: booking.customer_name,
        event_date: booking.event_date,
        start: booking.start.to_string(),
        end: booking.end.to_string(),
        status: booking.status,
        space_name: space.space_name,
        guest_count: booking.config.guest_count,
        package: package_line,
        services: service_lines,
        total: priced.total,
    }))
}
