use std::collections::HashMap;
use std::str::FromStr;

use garde::Validate;
use kernel::model::catalog::PricingModel;
use kernel::model::id::{PackageId, ServiceId};
use kernel::model::slot::{PricingOverride, SlotConfiguration};
use kernel::model::time::TimeOfDay;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::error::{AppError, AppResult};

/// Wire shape of one slot's selections. Counts arrive as raw integers and
/// are clamped up to 1 on conversion; the pricing engine assumes clamped
/// values.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfigurationRequest {
    #[garde(skip)]
    pub package_id: Option<PackageId>,
    #[garde(skip)]
    #[serde(default)]
    pub service_ids: Vec<ServiceId>,
    #[garde(skip)]
    #[serde(default = "default_guest_count")]
    pub guest_count: i64,
    /// Only flat and per-guest rebilling make sense for a package; per-hour
    /// stays a catalog-level model.
    #[garde(custom(flat_or_per_person))]
    #[serde(default)]
    pub package_model_override: Option<PricingModel>,
    #[garde(skip)]
    #[serde(default)]
    pub quantities: HashMap<ServiceId, i64>,
}

fn default_guest_count() -> i64 {
    1
}

fn flat_or_per_person(value: &Option<PricingModel>, _ctx: &()) -> Result<(), garde::Error> {
    if matches!(value, Some(PricingModel::PerHour)) {
        return Err(garde::Error::new(
            "package pricing model override must be fixed or per_person",
        ));
    }
    Ok(())
}

impl From<SlotConfigurationRequest> for SlotConfiguration {
    fn from(value: SlotConfigurationRequest) -> Self {
        let SlotConfigurationRequest {
            package_id,
            service_ids,
            guest_count,
            package_model_override,
            quantities,
        } = value;
        // Selection is a set; drop duplicates while keeping order.
        let mut deduped: Vec<ServiceId> = Vec::with_capacity(service_ids.len());
        for id in service_ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        Self {
            package_id,
            service_ids: deduped,
            guest_count: clamp_count(guest_count),
            package_model_override,
            quantities: quantities
                .into_iter()
                .map(|(id, quantity)| (id, clamp_count(quantity)))
                .collect(),
        }
    }
}

fn clamp_count(raw: i64) -> u32 {
    raw.clamp(1, u32::MAX as i64) as u32
}

/// Wire shape of manual price overrides. Prices arrive as free-form text
/// from the pricing form; empty or non-numeric input means "no override",
/// never zero.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverrideRequest {
    #[serde(default)]
    pub package_price: Option<String>,
    #[serde(default)]
    pub service_prices: HashMap<ServiceId, String>,
}

impl From<PricingOverrideRequest> for PricingOverride {
    fn from(value: PricingOverrideRequest) -> Self {
        Self {
            package_price: parse_price(value.package_price.as_deref()),
            service_prices: value
                .service_prices
                .iter()
                .filter_map(|(id, raw)| parse_price(Some(raw)).map(|price| (*id, price)))
                .collect(),
        }
    }
}

pub(crate) fn parse_price(raw: Option<&str>) -> Option<Decimal> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok()
}

/// Strings matching neither the 24-hour nor the 12-hour form are rejected
/// here at the validation boundary; the conflict detector itself never
/// sees unparsed text.
pub(crate) fn parse_time(raw: &str) -> AppResult<TimeOfDay> {
    raw.parse()
        .map_err(|e: kernel::model::time::ParseTimeError| {
            AppError::UnprocessableEntity(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn counts_are_clamped_up_to_one() {
        let service_id = ServiceId::new();
        let request = SlotConfigurationRequest {
            package_id: None,
            service_ids: vec![service_id],
            guest_count: -3,
            package_model_override: None,
            quantities: [(service_id, 0)].into(),
        };

        let config = SlotConfiguration::from(request);
        assert_eq!(config.guest_count, 1);
        assert_eq!(config.quantities.get(&service_id), Some(&1));
    }

    #[test]
    fn duplicate_selections_collapse() {
        let service_id = ServiceId::new();
        let request = SlotConfigurationRequest {
            package_id: None,
            service_ids: vec![service_id, service_id],
            guest_count: 10,
            package_model_override: None,
            quantities: HashMap::new(),
        };

        let config = SlotConfiguration::from(request);
        assert_eq!(config.service_ids, vec![service_id]);
    }

    #[test]
    fn per_hour_package_override_fails_validation() {
        let base = |model| SlotConfigurationRequest {
            package_id: None,
            service_ids: vec![],
            guest_count: 10,
            package_model_override: model,
            quantities: HashMap::new(),
        };

        assert!(base(Some(PricingModel::PerHour)).validate(&()).is_err());
        assert!(base(Some(PricingModel::PerPerson)).validate(&()).is_ok());
        assert!(base(Some(PricingModel::Fixed)).validate(&()).is_ok());
        assert!(base(None).validate(&()).is_ok());
    }

    #[test]
    fn malformed_override_price_means_no_override() {
        assert_eq!(parse_price(None), None);
        assert_eq!(parse_price(Some("")), None);
        assert_eq!(parse_price(Some("   ")), None);
        assert_eq!(parse_price(Some("abc")), None);
        assert_eq!(parse_price(Some("450.00")), Some(dec!(450.00)));
    }

    #[test]
    fn override_request_drops_unparseable_entries() {
        let priced = ServiceId::new();
        let garbled = ServiceId::new();
        let request = PricingOverrideRequest {
            package_price: Some("not a price".into()),
            service_prices: [(priced, "12.50".into()), (garbled, "".into())].into(),
        };

        let overrides = PricingOverride::from(request);
        assert_eq!(overrides.package_price, None);
        assert_eq!(overrides.service_prices.get(&priced), Some(&dec!(12.50)));
        assert!(!overrides.service_prices.contains_key(&garbled));
    }
}
