use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::catalog::event::{CreateService, DeletePackage, DeleteService};
use kernel::model::id::{PackageId, ServiceId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::catalog::{
    CreatePackageRequest, CreateServiceRequest, ImportServiceRecord, ImportServicesResponse,
    PackageResponse, PackagesResponse, ServiceResponse, ServicesResponse, UpdatePackageRequest,
    UpdatePackageRequestWithId, UpdateServiceRequest, UpdateServiceRequestWithId,
};

pub async fn register_service(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateServiceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .catalog_repository()
        .create_service(req.into())
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn show_service_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServicesResponse>> {
    let items = registry
        .catalog_repository()
        .find_all_services()
        .await?
        .into_iter()
        .map(ServiceResponse::from)
        .collect();
    Ok(Json(ServicesResponse { items }))
}

pub async fn show_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServiceResponse>> {
    registry
        .catalog_repository()
        .find_service_by_id(service_id)
        .await?
        .map(ServiceResponse::from)
        .map(Json)
        .ok_or(AppError::EntityNotFound("service not found".into()))
}

pub async fn update_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateServiceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateServiceRequestWithId::new(service_id, req);
    registry
        .catalog_repository()
        .update_service(update.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .catalog_repository()
        .delete_service(DeleteService { service_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk-loads the service menu from a CSV document. The whole file is
/// validated before anything is written, and the batch insert itself is
/// transactional; one bad row rejects the import.
pub async fn import_services(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    body: String,
) -> AppResult<Json<ImportServicesResponse>> {
    let records = parse_import_records(&body)?;
    let imported = registry
        .catalog_repository()
        .create_services(records)
        .await?;

    Ok(Json(ImportServicesResponse { imported }))
}

fn parse_import_records(body: &str) -> AppResult<Vec<CreateService>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<ImportServiceRecord>().enumerate() {
        let record = row.map_err(|e| {
            AppError::UnprocessableEntity(format!("csv row {}: {e}", index + 1))
        })?;
        records.push(record.into());
    }
    Ok(records)
}

pub async fn register_package(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePackageRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .catalog_repository()
        .create_package(req.into())
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn show_package_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PackagesResponse>> {
    let items = registry
        .catalog_repository()
        .find_all_packages()
        .await?
        .into_iter()
        .map(PackageResponse::from)
        .collect();
    Ok(Json(PackagesResponse { items }))
}

pub async fn show_package(
    _user: AuthorizedUser,
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PackageResponse>> {
    registry
        .catalog_repository()
        .find_package_by_id(package_id)
        .await?
        .map(PackageResponse::from)
        .map(Json)
        .ok_or(AppError::EntityNotFound("package not found".into()))
}

pub async fn update_package(
    _user: AuthorizedUser,
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePackageRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdatePackageRequestWithId::new(package_id, req);
    registry
        .catalog_repository()
        .update_package(update.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_package(
    _user: AuthorizedUser,
    Path(package_id): Path<PackageId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .catalog_repository()
        .delete_package(DeletePackage { package_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::catalog::PricingModel;
    use rust_decimal_macros::dec;

    #[test]
    fn csv_rows_map_to_service_commands() {
        let body = "name,description,category,unit_price,pricing_model\n\
                    DJ booth, evening set ,entertainment,150.00,per_hour\n\
                    Linens,,decor,75,fixed\n";

        let records = parse_import_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "DJ booth");
        assert_eq!(records[0].description, "evening set");
        assert_eq!(records[0].category, "entertainment");
        assert_eq!(records[0].unit_price, dec!(150.00));
        assert_eq!(records[0].pricing_model, PricingModel::PerHour);
        assert_eq!(records[1].description, "");
        assert_eq!(records[1].pricing_model, PricingModel::Fixed);
    }

    #[test]
    fn missing_optional_columns_default_to_empty() {
        let body = "name,unit_price,pricing_model\nAV package,300,fixed\n";

        let records = parse_import_records(body).unwrap();
        assert_eq!(records[0].name, "AV package");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].category, "");
    }

    #[test]
    fn one_bad_row_rejects_the_whole_import() {
        let body = "name,description,category,unit_price,pricing_model\n\
                    Valid,,general,100,fixed\n\
                    Broken,,general,not-a-price,fixed\n";

        let err = parse_import_records(body).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn unknown_pricing_model_is_rejected() {
        let body = "name,description,category,unit_price,pricing_model\n\
                    Balloons,,decor,25,per_balloon\n";

        assert!(parse_import_records(body).is_err());
    }
}
