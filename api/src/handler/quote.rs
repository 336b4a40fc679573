use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::catalog::{Package, Service};
use kernel::model::id::SpaceId;
use kernel::model::slot::{EventSlot, SlotConfiguration};
use kernel::pricing::compute_slot_total;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::quote::{QuoteRequest, QuoteResponse};
use crate::model::slot::parse_time;

/// Resolves the catalog entities a slot configuration references. Dangling
/// ids resolve to nothing and price as zero; a package restricted to other
/// spaces is rejected outright.
pub(crate) async fn resolve_catalog(
    registry: &AppRegistry,
    space_id: SpaceId,
    config: &SlotConfiguration,
) -> AppResult<(Option<Package>, Vec<Service>)> {
    let package = match config.package_id {
        Some(package_id) => {
            registry
                .catalog_repository()
                .find_package_by_id(package_id)
                .await?
        }
        None => None,
    };
    if let Some(pkg) = &package {
        if !pkg.sellable_in(space_id) {
            return Err(AppError::UnprocessableEntity(format!(
                "package \"{}\" is not sellable in the selected space",
                pkg.name
            )));
        }
    }

    let services = registry
        .catalog_repository()
        .find_services_by_ids(&config.service_ids)
        .await?;
    Ok((package, services))
}

pub async fn quote(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<QuoteRequest>,
) -> AppResult<Json<QuoteResponse>> {
    req.validate(&())?;

    let QuoteRequest {
        space_id,
        event_date,
        start,
        end,
        config,
        overrides,
    } = req;
    let start = parse_time(&start)?;
    let end = parse_time(&end)?;

    registry
        .space_repository()
        .find_by_id(space_id)
        .await?
        .ok_or(AppError::EntityNotFound("space not found".into()))?;

    let config: SlotConfiguration = config.into();
    let overrides = overrides.into();
    let (package, services) = resolve_catalog(&registry, space_id, &config).await?;

    let slot = EventSlot {
        space_id,
        event_date,
        start,
        end,
    };
    let duration_hours = slot.duration_hours();
    let total = compute_slot_total(
        &config,
        &overrides,
        package.as_ref(),
        &services,
        duration_hours,
    );

    Ok(Json(QuoteResponse::new(total, duration_hours)))
}
