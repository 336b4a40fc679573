//! Slot price computation.
//!
//! Pure function of the slot configuration, manual overrides, and the
//! already-resolved catalog entities. Absent entities contribute nothing;
//! there are no error paths.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::model::catalog::{Package, PricingModel, Service};
use crate::model::id::{PackageId, ServiceId};
use crate::model::slot::{PricingOverride, SlotConfiguration};

/// One slot's price, broken down by charge. Consumed whole by the quote
/// endpoint and line by line by the BEO document builder.
#[derive(Debug)]
pub struct PricedSlot {
    pub package: Option<PackageCharge>,
    pub services: Vec<ServiceCharge>,
    pub total: Decimal,
}

#[derive(Debug)]
pub struct PackageCharge {
    pub package_id: PackageId,
    pub pricing_model: PricingModel,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

#[derive(Debug)]
pub struct ServiceCharge {
    pub service_id: ServiceId,
    pub pricing_model: PricingModel,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub amount: Decimal,
    /// Paid for by the selected package; listed with a zero amount.
    pub included_in_package: bool,
}

/// Computes the monetary total for one scheduled event slot.
///
/// See [`price_slot`] for the rules; this is the aggregate contract callers
/// recompute on every relevant state change.
pub fn compute_slot_total(
    config: &SlotConfiguration,
    overrides: &PricingOverride,
    package: Option<&Package>,
    services: &[Service],
    duration_hours: Decimal,
) -> Decimal {
    price_slot(config, overrides, package, services, duration_hours).total
}

/// Prices one scheduled event slot.
///
/// The package contributes its effective price (override else catalog) scaled
/// by its effective pricing model (slot override else catalog). Each selected
/// add-on service contributes likewise, except that services included in the
/// selected package are never charged again. Quantity multiplies fixed-price
/// services only. No currency rounding happens here; callers format at
/// display time. Absent entities contribute nothing.
pub fn price_slot(
    config: &SlotConfiguration,
    overrides: &PricingOverride,
    package: Option<&Package>,
    services: &[Service],
    duration_hours: Decimal,
) -> PricedSlot {
    let guests = Decimal::from(config.guest_count.max(1));

    let package_charge = package.map(|pkg| {
        let unit = overrides.package_price.unwrap_or(pkg.price);
        let model = config.package_model_override.unwrap_or(pkg.pricing_model);
        let amount = match model {
            PricingModel::PerPerson => unit * guests,
            PricingModel::PerHour => unit * duration_hours,
            PricingModel::Fixed => unit,
        };
        PackageCharge {
            package_id: pkg.package_id,
            pricing_model: model,
            unit_price: unit,
            amount,
        }
    });

    let mut service_charges = Vec::new();
    // Selection has set semantics; a duplicated id must not charge twice.
    let mut seen = HashSet::new();
    for service_id in &config.service_ids {
        if !seen.insert(*service_id) {
            continue;
        }
        let Some(service) = services.iter().find(|s| s.service_id == *service_id) else {
            continue;
        };
        let quantity = config.quantities.get(service_id).copied().unwrap_or(1).max(1);

        if package.is_some_and(|pkg| pkg.includes(*service_id)) {
            service_charges.push(ServiceCharge {
                service_id: *service_id,
                pricing_model: service.pricing_model,
                unit_price: Decimal::ZERO,
                quantity,
                amount: Decimal::ZERO,
                included_in_package: true,
            });
            continue;
        }

        let unit = overrides
            .service_prices
            .get(service_id)
            .copied()
            .unwrap_or(service.unit_price);
        let amount = match service.pricing_model {
            PricingModel::PerPerson => unit * guests,
            PricingModel::PerHour => unit * duration_hours,
            PricingModel::Fixed => unit * Decimal::from(quantity),
        };
        service_charges.push(ServiceCharge {
            service_id: *service_id,
            pricing_model: service.pricing_model,
            unit_price: unit,
            quantity,
            amount,
            included_in_package: false,
        });
    }

    let total = package_charge.as_ref().map_or(Decimal::ZERO, |c| c.amount)
        + service_charges.iter().map(|c| c.amount).sum::<Decimal>();

    PricedSlot {
        package: package_charge,
        services: service_charges,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{PackageId, ServiceId};
    use rust_decimal_macros::dec;

    fn service(name: &str, price: Decimal, model: PricingModel) -> Service {
        Service {
            service_id: ServiceId::new(),
            name: name.into(),
            description: String::new(),
            category: "general".into(),
            unit_price: price,
            pricing_model: model,
        }
    }

    fn package(price: Decimal, model: PricingModel, included: Vec<ServiceId>) -> Package {
        Package {
            package_id: PackageId::new(),
            name: "Gala".into(),
            description: String::new(),
            price,
            pricing_model: model,
            included_services: included,
            applicable_spaces: None,
        }
    }

    fn config_with(package: Option<&Package>, services: &[&Service]) -> SlotConfiguration {
        SlotConfiguration {
            package_id: package.map(|p| p.package_id),
            service_ids: services.iter().map(|s| s.service_id).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn flat_package_alone() {
        let pkg = package(dec!(500), PricingModel::Fixed, vec![]);
        let mut config = config_with(Some(&pkg), &[]);
        config.guest_count = 50;

        let total = compute_slot_total(
            &config,
            &PricingOverride::default(),
            Some(&pkg),
            &[],
            dec!(4),
        );
        assert_eq!(total, dec!(500));
    }

    #[test]
    fn per_person_package_plus_flat_addon() {
        let pkg = package(dec!(20), PricingModel::PerPerson, vec![]);
        let av = service("AV", dec!(100), PricingModel::Fixed);
        let mut config = config_with(Some(&pkg), &[&av]);
        config.guest_count = 50;

        let total = compute_slot_total(
            &config,
            &PricingOverride::default(),
            Some(&pkg),
            &[av],
            dec!(4),
        );
        assert_eq!(total, dec!(1100));
    }

    #[test]
    fn included_service_is_never_charged() {
        let linens = service("Linens", dec!(75), PricingModel::Fixed);
        let pkg = package(dec!(500), PricingModel::Fixed, vec![linens.service_id]);
        // "Linens" is also separately selected as an add-on.
        let mut config = config_with(Some(&pkg), &[&linens]);
        config.guest_count = 30;
        // Even an override on the included service must not charge it.
        let mut overrides = PricingOverride::default();
        overrides.service_prices.insert(linens.service_id, dec!(999));

        let total = compute_slot_total(&config, &overrides, Some(&pkg), &[linens], dec!(3));
        assert_eq!(total, dec!(500));
    }

    #[test]
    fn per_person_scales_linearly_with_guest_count() {
        let pkg = package(dec!(35), PricingModel::PerPerson, vec![]);
        let overrides = PricingOverride::default();
        let mut config = config_with(Some(&pkg), &[]);

        for n in 1..20 {
            config.guest_count = n;
            let at_n = compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(2));
            config.guest_count = n + 1;
            let at_n_plus_1 =
                compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(2));
            assert_eq!(at_n_plus_1 - at_n, dec!(35));
        }
    }

    #[test]
    fn fixed_contribution_ignores_guest_count() {
        let pkg = package(dec!(800), PricingModel::Fixed, vec![]);
        let overrides = PricingOverride::default();
        let mut config = config_with(Some(&pkg), &[]);

        config.guest_count = 1;
        let small = compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(5));
        config.guest_count = 500;
        let large = compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(5));
        assert_eq!(small, large);
    }

    #[test]
    fn per_hour_scales_with_duration() {
        let dj = service("DJ", dec!(150), PricingModel::PerHour);
        let config = config_with(None, &[&dj]);

        let total =
            compute_slot_total(&config, &PricingOverride::default(), None, &[dj], dec!(4.5));
        assert_eq!(total, dec!(675));
    }

    #[test]
    fn quantity_multiplies_fixed_services_only() {
        let centerpiece = service("Centerpiece", dec!(40), PricingModel::Fixed);
        let staff = service("Server", dec!(30), PricingModel::PerHour);
        let mut config = config_with(None, &[&centerpiece, &staff]);
        config.quantities.insert(centerpiece.service_id, 12);
        // Quantity on a per-hour item is ignored.
        config.quantities.insert(staff.service_id, 7);

        let total = compute_slot_total(
            &config,
            &PricingOverride::default(),
            None,
            &[centerpiece, staff],
            dec!(2),
        );
        assert_eq!(total, dec!(40) * dec!(12) + dec!(30) * dec!(2));
    }

    #[test]
    fn override_replaces_catalog_price_until_cleared() {
        let pkg = package(dec!(500), PricingModel::Fixed, vec![]);
        let config = config_with(Some(&pkg), &[]);

        let mut overrides = PricingOverride::default();
        overrides.package_price = Some(dec!(450));
        let with_override =
            compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(3));
        assert_eq!(with_override, dec!(450));

        overrides.package_price = None;
        let cleared = compute_slot_total(&config, &overrides, Some(&pkg), &[], dec!(3));
        assert_eq!(cleared, dec!(500));
    }

    #[test]
    fn absent_entities_contribute_nothing() {
        let config = SlotConfiguration {
            service_ids: vec![ServiceId::new()],
            ..Default::default()
        };
        let total =
            compute_slot_total(&config, &PricingOverride::default(), None, &[], dec!(2));
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn duplicated_selection_charges_once() {
        let av = service("AV", dec!(100), PricingModel::Fixed);
        let mut config = config_with(None, &[&av, &av]);
        config.guest_count = 10;

        let total = compute_slot_total(
            &config,
            &PricingOverride::default(),
            None,
            &[av],
            dec!(2),
        );
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn package_model_override_switches_billing_basis() {
        let pkg = package(dec!(25), PricingModel::Fixed, vec![]);
        let mut config = config_with(Some(&pkg), &[]);
        config.guest_count = 40;
        config.package_model_override = Some(PricingModel::PerPerson);

        let total =
            compute_slot_total(&config, &PricingOverride::default(), Some(&pkg), &[], dec!(6));
        assert_eq!(total, dec!(1000));
    }

    #[test]
    fn breakdown_lists_included_services_at_zero() {
        let linens = service("Linens", dec!(75), PricingModel::Fixed);
        let av = service("AV", dec!(100), PricingModel::Fixed);
        let pkg = package(dec!(500), PricingModel::Fixed, vec![linens.service_id]);
        let config = config_with(Some(&pkg), &[&linens, &av]);

        let priced = price_slot(
            &config,
            &PricingOverride::default(),
            Some(&pkg),
            &[linens.clone(), av.clone()],
            dec!(3),
        );
        assert_eq!(priced.total, dec!(600));
        assert_eq!(priced.package.unwrap().amount, dec!(500));
        assert_eq!(priced.services.len(), 2);

        let linens_line = priced
            .services
            .iter()
            .find(|c| c.service_id == linens.service_id)
            .unwrap();
        assert!(linens_line.included_in_package);
        assert_eq!(linens_line.amount, Decimal::ZERO);

        let av_line = priced
            .services
            .iter()
            .find(|c| c.service_id == av.service_id)
            .unwrap();
        assert!(!av_line.included_in_package);
        assert_eq!(av_line.amount, dec!(100));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let pkg = package(dec!(20), PricingModel::PerPerson, vec![]);
        let av = service("AV", dec!(100), PricingModel::Fixed);
        let mut config = config_with(Some(&pkg), &[&av]);
        config.guest_count = 50;
        let overrides = PricingOverride::default();
        let services = [av];

        let first = compute_slot_total(&config, &overrides, Some(&pkg), &services, dec!(4));
        let second = compute_slot_total(&config, &overrides, Some(&pkg), &services, dec!(4));
        assert_eq!(first, second);
    }
}
