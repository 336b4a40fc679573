use kernel::model::catalog::{Package, PricingModel, Service};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::FromRow;
use uuid::Uuid;

fn parse_pricing_model(raw: &str) -> Result<PricingModel, AppError> {
    raw.parse()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown pricing model: {raw}")))
}

#[derive(FromRow)]
pub struct ServiceRow {
    pub service_id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit_price: Decimal,
    pub pricing_model: String,
}

impl TryFrom<ServiceRow> for Service {
    type Error = AppError;

    fn try_from(value: ServiceRow) -> Result<Self, Self::Error> {
        let ServiceRow {
            service_id,
            name,
            description,
            category,
            unit_price,
            pricing_model,
        } = value;
        Ok(Service {
            service_id: service_id.into(),
            name,
            description,
            category,
            unit_price,
            pricing_model: parse_pricing_model(&pricing_model)?,
        })
    }
}

#[derive(FromRow)]
pub struct PackageRow {
    pub package_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub pricing_model: String,
    pub included_services: Vec<Uuid>,
    pub applicable_spaces: Option<Vec<Uuid>>,
}

impl TryFrom<PackageRow> for Package {
    type Error = AppError;

    fn try_from(value: PackageRow) -> Result<Self, Self::Error> {
        let PackageRow {
            package_id,
            name,
            description,
            price,
            pricing_model,
            included_services,
            applicable_spaces,
        } = value;
        Ok(Package {
            package_id: package_id.into(),
            name,
            description,
            price,
            pricing_model: parse_pricing_model(&pricing_model)?,
            included_services: included_services.into_iter().map(Into::into).collect(),
            applicable_spaces: applicable_spaces
                .map(|spaces| spaces.into_iter().map(Into::into).collect()),
        })
    }
}
