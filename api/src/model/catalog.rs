use derive_new::new;
use garde::Validate;
use kernel::model::catalog::event::{CreatePackage, CreateService, UpdatePackage, UpdateService};
use kernel::model::catalog::{Package, PricingModel, Service};
use kernel::model::id::{PackageId, ServiceId, SpaceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    #[serde(default)]
    pub category: String,
    #[garde(skip)]
    pub unit_price: Decimal,
    #[garde(skip)]
    pub pricing_model: PricingModel,
}

impl From<CreateServiceRequest> for CreateService {
    fn from(value: CreateServiceRequest) -> Self {
        let CreateServiceRequest {
            name,
            description,
            category,
            unit_price,
            pricing_model,
        } = value;
        Self {
            name,
            description,
            category,
            unit_price,
            pricing_model,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub unit_price: Option<Decimal>,
    #[garde(skip)]
    pub pricing_model: Option<PricingModel>,
}

#[derive(new)]
pub struct UpdateServiceRequestWithId(ServiceId, UpdateServiceRequest);

impl From<UpdateServiceRequestWithId> for UpdateService {
    fn from(value: UpdateServiceRequestWithId) -> Self {
        let UpdateServiceRequestWithId(
            service_id,
            UpdateServiceRequest {
                name,
                description,
                category,
                unit_price,
                pricing_model,
            },
        ) = value;
        Self {
            service_id,
            name,
            description,
            category,
            unit_price,
            pricing_model,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit_price: Decimal,
    pub pricing_model: PricingModel,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        let Service {
            service_id,
            name,
            description,
            category,
            unit_price,
            pricing_model,
        } = value;
        Self {
            service_id,
            name,
            description,
            category,
            unit_price,
            pricing_model,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
    pub items: Vec<ServiceResponse>,
}

/// One row of the service menu CSV import.
/// Columns: name, description, category, unit_price, pricing_model.
#[derive(Debug, Deserialize)]
pub struct ImportServiceRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub unit_price: Decimal,
    pub pricing_model: PricingModel,
}

impl From<ImportServiceRecord> for CreateService {
    fn from(value: ImportServiceRecord) -> Self {
        let ImportServiceRecord {
            name,
            description,
            category,
            unit_price,
            pricing_model,
        } = value;
        Self {
            name,
            description,
            category,
            unit_price,
            pricing_model,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportServicesResponse {
    pub imported: u32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    pub price: Decimal,
    #[garde(skip)]
    pub pricing_model: PricingModel,
    #[garde(skip)]
    #[serde(default)]
    pub included_services: Vec<ServiceId>,
    #[garde(skip)]
    #[serde(default)]
    pub applicable_spaces: Option<Vec<SpaceId>>,
}

impl From<CreatePackageRequest> for CreatePackage {
    fn from(value: CreatePackageRequest) -> Self {
        let CreatePackageRequest {
            name,
            description,
            price,
            pricing_model,
            included_services,
            applicable_spaces,
        } = value;
        Self {
            name,
            description,
            price,
            pricing_model,
            included_services,
            // An explicitly empty list means "sellable nowhere" is never
            // intended; treat it as clearing the restriction.
            applicable_spaces: applicable_spaces.filter(|spaces| !spaces.is_empty()),
        }
    }
}

/// `applicableSpaces: []` clears the space restriction; an absent field
/// leaves it unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackageRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub price: Option<Decimal>,
    #[garde(skip)]
    pub pricing_model: Option<PricingModel>,
    #[garde(skip)]
    pub included_services: Option<Vec<ServiceId>>,
    #[garde(skip)]
    pub applicable_spaces: Option<Vec<SpaceId>>,
}

#[derive(new)]
pub struct UpdatePackageRequestWithId(PackageId, UpdatePackageRequest);

impl From<UpdatePackageRequestWithId> for UpdatePackage {
    fn from(value: UpdatePackageRequestWithId) -> Self {
        let UpdatePackageRequestWithId(
            package_id,
            UpdatePackageRequest {
                name,
                description,
                price,
                pricing_model,
                included_services,
                applicable_spaces,
            },
        ) = value;
        Self {
            package_id,
            name,
            description,
            price,
            pricing_model,
            included_services,
            applicable_spaces: applicable_spaces.map(|spaces| {
                if spaces.is_empty() {
                    None
                } else {
                    Some(spaces)
                }
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub package_id: PackageId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub pricing_model: PricingModel,
    pub included_services: Vec<ServiceId>,
    pub applicable_spaces: Option<Vec<SpaceId>>,
}

impl From<Package> for PackageResponse {
    fn from(value: Package) -> Self {
        let Package {
            package_id,
            name,
            description,
            price,
            pricing_model,
            included_services,
            applicable_spaces,
        } = value;
        Self {
            package_id,
            name,
            description,
            price,
            pricing_model,
            included_services,
            applicable_spaces,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagesResponse {
    pub items: Vec<PackageResponse>,
}
