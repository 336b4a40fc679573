use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::availability::check_availability;
use kernel::model::id::SpaceId;
use kernel::model::slot::EventSlot;
use kernel::model::space::event::DeleteSpace;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::availability::{AvailabilityQuery, AvailabilityResponse};
use crate::model::booking::ConflictResponse;
use crate::model::slot::parse_time;
use crate::model::space::{
    CreateSpaceRequest, SpaceResponse, SpacesResponse, UpdateSpaceRequest,
    UpdateSpaceRequestWithId,
};

pub async fn register_space(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSpaceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry.space_repository().create(req.into()).await?;
    Ok(StatusCode::CREATED)
}

pub async fn show_space_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    let items = registry
        .space_repository()
        .find_all()
        .await?
        .into_iter()
        .map(SpaceResponse::from)
        .collect();
    Ok(Json(SpacesResponse { items }))
}

pub async fn show_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await?
        .map(SpaceResponse::from)
        .map(Json)
        .ok_or(AppError::EntityNotFound("space not found".into()))
}

pub async fn update_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateSpaceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateSpaceRequestWithId::new(space_id, req);
    registry.space_repository().update(update.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .space_repository()
        .delete(DeleteSpace { space_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pre-save availability probe for the booking form. Reads only; saving
/// re-checks inside the booking transaction.
pub async fn check_space_availability(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    let start = parse_time(&query.start)?;
    let end = parse_time(&query.end)?;
    if start >= end {
        return Err(AppError::UnprocessableEntity(
            "start time must precede end time".into(),
        ));
    }

    registry
        .space_repository()
        .find_by_id(space_id)
        .await?
        .ok_or(AppError::EntityNotFound("space not found".into()))?;

    let existing = registry
        .booking_repository()
        .find_by_space_and_date(space_id, query.date)
        .await?;
    let slot = EventSlot {
        space_id,
        event_date: query.date,
        start,
        end,
    };
    let availability = check_availability(&slot, &existing, query.exclude_booking_id);

    Ok(Json(AvailabilityResponse {
        available: availability.available,
        conflict: availability.conflict.map(ConflictResponse::from),
    }))
}
