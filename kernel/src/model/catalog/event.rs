use rust_decimal::Decimal;

use crate::model::catalog::PricingModel;
use crate::model::id::{PackageId, ServiceId, SpaceId};

#[derive(Debug)]
pub struct CreateService {
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit_price: Decimal,
    pub pricing_model: PricingModel,
}

#[derive(Debug)]
pub struct UpdateService {
    pub service_id: ServiceId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<Decimal>,
    pub pricing_model: Option<PricingModel>,
}

#[derive(Debug)]
pub struct DeleteService {
    pub service_id: ServiceId,
}

pub struct CreatePackage {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub pricing_model: PricingModel,
    pub included_services: Vec<ServiceId>,
    pub applicable_spaces: Option<Vec<SpaceId>>,
}

#[derive(Debug)]
pub struct UpdatePackage {
    pub package_id: PackageId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub pricing_model: Option<PricingModel>,
    pub included_services: Option<Vec<ServiceId>>,
    pub applicable_spaces: Option<Option<Vec<SpaceId>>>,
}

#[derive(Debug)]
pub struct DeletePackage {
    pub package_id: PackageId,
}
