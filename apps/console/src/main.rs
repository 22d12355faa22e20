//! # Autolot Console
//!
//! Demo front end for the Autolot marketplace: wires the auth stack to the
//! catalog/purchase core and walks one buyer through a full session.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  bootstrap superadmin ─► register buyer ─► login                    │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  seed catalog ─► browse ─► fill cart ─► checkout ─► print invoice   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod seed;

use std::collections::BTreeMap;

use tracing::info;
use tracing_subscriber::EnvFilter;

use autolot_auth::{
    AuthService, JsonUserStore, RegistrationService, Role, UserAdminService,
    SUPERADMIN_DEFAULT_PASSWORD,
};
use autolot_core::validation::{validate_plate, validate_quantity, ValidationResult};
use autolot_core::{Cart, CatalogEntity, CatalogStore, PurchaseService, ReportLedger};

use crate::config::ConsoleConfig;
use crate::seed::seed_catalog;

const DEMO_BUYER: &str = "juanito";
const DEMO_PASSWORD: &str = "Compra#2024";
const DEMO_PLATE: &str = "abc-123";

/// Caller-side checkout validation: the purchase core trusts its inputs,
/// so the front end checks the plate and every line quantity first.
fn validate_checkout(cart: &Cart, plate: &str) -> ValidationResult<()> {
    for line in cart.items() {
        validate_quantity(line.quantity())?;
    }
    validate_plate(plate)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConsoleConfig::load();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Starting Autolot console...");
    info!(data_dir = %config.data_dir.display(), "Configuration loaded");

    // ---- accounts ----------------------------------------------------------
    let mut users = JsonUserStore::open(config.users_file())?;

    let admin = UserAdminService::new();
    admin.ensure_superadmin(&mut users, SUPERADMIN_DEFAULT_PASSWORD);

    let registration = RegistrationService::new();
    if users.get(DEMO_BUYER).is_none() {
        registration
            .register(
                &mut users,
                DEMO_BUYER,
                DEMO_PASSWORD,
                Role::Buyer,
                BTreeMap::new(),
            )
            .map_err(|reason| format!("demo buyer registration failed: {reason}"))?;
    }

    let mut auth = AuthService::new();
    let outcome = auth.login(&users, DEMO_BUYER, DEMO_PASSWORD);
    if !outcome.is_success() {
        return Err(format!("demo buyer login failed: {outcome:?}").into());
    }
    let buyer = auth.current_user().cloned().ok_or("no current user after login")?;

    // ---- catalog -----------------------------------------------------------
    let mut catalog = CatalogStore::new();
    seed_catalog(&mut catalog);

    println!("\n=== Catalog ===");
    for entity in catalog.list() {
        println!("  [{}] {} - {}", entity.kind(), entity.id(), entity.label());
    }

    // ---- cart --------------------------------------------------------------
    let mut cart = Cart::new();

    let corolla = catalog.get("V001").ok_or("seeded vehicle V001 missing")?;
    cart.add(&corolla, 1);

    if let Some(filter) = catalog
        .parts()
        .into_iter()
        .find(|part| part.name == "Air filter")
    {
        let entity = CatalogEntity::from(filter);
        cart.add(&entity, 2);
    }
    if let Some(policy) = catalog.policies().into_iter().next() {
        let entity = CatalogEntity::from(policy);
        cart.add(&entity, 1);
    }

    println!("\n=== Cart ({} lines) ===", cart.len());
    for line in cart.items() {
        println!(
            "  {} x{} = {}",
            line.entity().label(),
            line.quantity(),
            line.line_total()
        );
    }

    // ---- checkout ----------------------------------------------------------
    validate_checkout(&cart, DEMO_PLATE)?;

    let mut purchases = PurchaseService::new(catalog, ReportLedger::new());
    let invoice = purchases.create_invoice(cart.items(), &buyer.username, DEMO_PLATE);
    cart.clear();

    println!("\n=== Invoice {} ===", invoice.id());
    println!("  Buyer:    {}", invoice.buyer_username());
    println!("  Plate:    {}", invoice.plate());
    for line in invoice.items() {
        println!(
            "  {} x{} = {}",
            line.entity().label(),
            line.quantity(),
            line.line_total()
        );
    }
    println!("  Subtotal: {}", invoice.subtotal());
    println!("  Tax:      {}", invoice.tax());
    println!("  Total:    {}", invoice.total());

    let ledger = purchases.ledger();
    println!("\n=== Ledger ===");
    println!("  Invoices:    {}", ledger.len());
    println!("  Total sales: {}", ledger.total_sales());

    let remaining = purchases
        .catalog()
        .parts()
        .into_iter()
        .find(|part| part.name == "Air filter")
        .map(|part| part.stock)
        .unwrap_or(0);
    println!("  Air filter stock after sale: {remaining}");

    auth.logout();
    info!("Session complete");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use autolot_core::{Money, Vehicle};

    fn cart_with_vehicle() -> Cart {
        let vehicle = Vehicle::new(
            "V001",
            "Toyota",
            "Corolla 2024",
            Money::from_cents(4_500_000),
            24,
            "free",
            "",
        )
        .expect("price is non-negative");
        let mut cart = Cart::new();
        cart.add(&CatalogEntity::Vehicle(vehicle), 1);
        cart
    }

    #[test]
    fn test_validate_checkout_accepts_demo_plate() {
        let cart = cart_with_vehicle();
        assert!(validate_checkout(&cart, DEMO_PLATE).is_ok());
        assert!(validate_checkout(&cart, "ABC-123").is_ok());
    }

    #[test]
    fn test_validate_checkout_rejects_bad_plate() {
        let cart = cart_with_vehicle();
        assert!(validate_checkout(&cart, "AB").is_err());
        assert!(validate_checkout(&cart, "AB 123").is_err());
        assert!(validate_checkout(&cart, "ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_validate_checkout_empty_cart_checks_plate_only() {
        let cart = Cart::new();
        assert!(validate_checkout(&cart, DEMO_PLATE).is_ok());
        assert!(validate_checkout(&cart, "!").is_err());
    }
}
