use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::id::{PackageId, ServiceId, SpaceId};

pub mod event;

/// Billing basis for a priced catalog item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PricingModel {
    Fixed,
    PerPerson,
    PerHour,
}

/// An individually purchasable line item.
#[derive(Debug, Clone)]
pub struct Service {
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit_price: Decimal,
    pub pricing_model: PricingModel,
}

/// A bundle of included services sold at a single price.
///
/// Included services are never separately charged while this package is
/// selected.
#[derive(Debug, Clone)]
pub struct Package {
    pub package_id: PackageId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub pricing_model: PricingModel,
    pub included_services: Vec<ServiceId>,
    /// When present, the package may only be sold in the listed spaces.
    pub applicable_spaces: Option<Vec<SpaceId>>,
}

impl Package {
    pub fn includes(&self, service_id: ServiceId) -> bool {
        self.included_services.contains(&service_id)
    }

    pub fn sellable_in(&self, space_id: SpaceId) -> bool {
        self.applicable_spaces
            .as_ref()
            .map_or(true, |spaces| spaces.contains(&space_id))
    }
}
