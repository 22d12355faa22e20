//! Initial catalog seeding.
//!
//! The demo inventory every fresh session starts from: three vehicles
//! across the price range, one insurance tier, and two consumable parts.

use tracing::info;

use autolot_core::{CatalogStore, InsurancePolicy, Money, Part, Vehicle};

/// Fills an empty catalog with the demo inventory.
///
/// The factories only reject negative prices and every seed price is
/// positive, so the expects here cannot fire.
pub fn seed_catalog(catalog: &mut CatalogStore) {
    info!("Seeding initial catalog...");

    let vehicles = [
        Vehicle::new(
            "V001",
            "Toyota",
            "Corolla 2024",
            Money::from_cents(45_000_00),
            24,
            "free",
            "Compact sedan",
        ),
        Vehicle::new(
            "V002",
            "Renault",
            "Kwid 2023",
            Money::from_cents(12_000_00),
            12,
            "per use",
            "Budget city car",
        ),
        Vehicle::new(
            "V003",
            "Tesla",
            "Model 3",
            Money::from_cents(60_000_00),
            36,
            "mandatory",
            "Electric",
        ),
    ];
    for vehicle in vehicles {
        catalog
            .add(vehicle.expect("seed prices are non-negative").into())
            .expect("seed vehicle ids are unique");
    }

    let policy = InsurancePolicy::new("Comprehensive", Money::from_cents(1_200_00), 12)
        .expect("seed prices are non-negative");
    catalog.add(policy.into()).expect("generated policy id is unique");

    let parts = [
        Part::new("Air filter", Money::from_cents(45_00), 20),
        Part::new("Spark plug", Money::from_cents(15_00), 50),
    ];
    for part in parts {
        catalog
            .add(part.expect("seed prices are non-negative").into())
            .expect("generated part ids are unique");
    }

    info!(
        vehicles = catalog.vehicles().len(),
        parts = catalog.parts().len(),
        policies = catalog.policies().len(),
        "Catalog loaded"
    );
}
