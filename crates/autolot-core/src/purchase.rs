//! # Purchase Flow
//!
//! Turns a cart of heterogeneous line items into a finalized invoice and
//! applies the inventory side effect.
//!
//! ## Checkout Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    create_invoice(cart, buyer, plate)               │
//! │                                                                     │
//! │  1. Snapshot the cart slice (defensive copy)                        │
//! │  2. Fresh UUID + timestamp                                          │
//! │  3. subtotal = Σ line totals; tax = round(subtotal × 19%);          │
//! │     total = subtotal + tax   ← computed exactly once                │
//! │  4. Uppercase the plate, if any                                     │
//! │  5. Log the invoice to the ledger          ← commit point           │
//! │  6. For every Part line: decrement stock (clamped at zero)          │
//! │  7. Return the invoice by value to the caller                       │
//! │                                                                     │
//! │  No rollback path: both effects are in-memory and cannot fail       │
//! │  independently. Once logged, the decrement always follows.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is deliberately lenient: an empty cart yields a zero-total
//! invoice. Rejecting empty carts is presentation policy, enforced before
//! this call, which keeps the builder a pure function of its inputs.

use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::ledger::ReportLedger;
use crate::types::{CatalogEntity, Invoice, LineItem};

/// Owns the catalog and the ledger, and runs checkouts against them.
///
/// Single ownership is the concurrency story: every mutation of catalog or
/// ledger state flows through this service's `&mut` methods, so there is
/// no aliased mutable state to race on, today or in a threaded port.
///
/// ## Usage
/// ```rust
/// use autolot_core::{CatalogStore, LineItem, Money, PurchaseService, ReportLedger, Vehicle};
///
/// let mut catalog = CatalogStore::new();
/// let vehicle = Vehicle::new("V001", "Toyota", "Corolla", Money::from_cents(2_000_000), 24, "free", "").unwrap();
/// catalog.add(vehicle.into()).unwrap();
///
/// let mut shop = PurchaseService::new(catalog, ReportLedger::new());
/// let line = LineItem::new(&shop.catalog().get("V001").unwrap(), 1);
/// let invoice = shop.create_invoice(&[line], "juanito", "");
/// assert_eq!(invoice.total().cents(), 2_380_000);
/// ```
#[derive(Debug, Default)]
pub struct PurchaseService {
    catalog: CatalogStore,
    ledger: ReportLedger,
}

impl PurchaseService {
    /// Takes ownership of the two collaborators.
    pub fn new(catalog: CatalogStore, ledger: ReportLedger) -> Self {
        PurchaseService { catalog, ledger }
    }

    /// Read access to the catalog (listings, admin views).
    #[inline]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable access to the catalog (admin CRUD).
    #[inline]
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// Read access to the ledger (reports).
    #[inline]
    pub fn ledger(&self) -> &ReportLedger {
        &self.ledger
    }

    /// Mutable access to the ledger (admin removal, plate attachment).
    #[inline]
    pub fn ledger_mut(&mut self) -> &mut ReportLedger {
        &mut self.ledger
    }

    /// Creates, totals, and logs an invoice from the cart snapshot, then
    /// decrements stock for every part line.
    ///
    /// Returns the invoice by value; the ledger keeps its own logged copy.
    pub fn create_invoice(
        &mut self,
        cart_items: &[LineItem],
        buyer_username: &str,
        plate: &str,
    ) -> Invoice {
        debug!(buyer = %buyer_username, lines = cart_items.len(), "Creating invoice");

        // Defensive copy: the caller keeps its cart and may mutate it
        // afterwards without touching this invoice.
        let invoice = Invoice::build(buyer_username, cart_items.to_vec(), plate);

        self.ledger.log_invoice(invoice.clone());

        // Inventory side effect: only parts carry stock. Exhaustive match,
        // no capability probing.
        for line in invoice.items() {
            match line.entity() {
                CatalogEntity::Part(part) => {
                    self.catalog.decrement_stock(&part.id, line.quantity());
                }
                CatalogEntity::Vehicle(_) | CatalogEntity::InsurancePolicy(_) => {}
            }
        }

        info!(
            invoice_id = %invoice.id(),
            buyer = %buyer_username,
            total = %invoice.total(),
            "Checkout complete"
        );

        invoice
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::money::Money;
    use crate::types::{Part, Vehicle};

    fn shop_with_corolla() -> PurchaseService {
        let mut catalog = CatalogStore::new();
        let vehicle = Vehicle::new(
            "V001",
            "Toyota",
            "Corolla",
            Money::from_cents(2_000_000),
            24,
            "free",
            "",
        )
        .unwrap();
        catalog.add(vehicle.into()).unwrap();
        PurchaseService::new(catalog, ReportLedger::new())
    }

    #[test]
    fn test_scenario_a_vehicle_purchase_totals() {
        // cart = [Vehicle($20,000.00) × 1] → tax $3,800.00, total $23,800.00
        let mut shop = shop_with_corolla();
        let entity = shop.catalog().get("V001").unwrap();
        let line = LineItem::new(&entity, 1);

        let invoice = shop.create_invoice(&[line], "juanito", "");

        assert_eq!(invoice.subtotal().cents(), 2_000_000);
        assert_eq!(invoice.tax().cents(), 380_000);
        assert_eq!(invoice.total().cents(), 2_380_000);
        assert_eq!(invoice.buyer_username(), "juanito");
        assert_eq!(shop.ledger().len(), 1);
    }

    #[test]
    fn test_scenario_d_empty_cart_yields_zero_total_invoice() {
        let mut shop = shop_with_corolla();

        let invoice = shop.create_invoice(&[], "alice", "");

        assert!(invoice.total().is_zero());
        assert_eq!(shop.ledger().len(), 1);
    }

    #[test]
    fn test_part_purchase_decrements_stock() {
        let mut catalog = CatalogStore::new();
        let part = Part::new("Air filter", Money::from_cents(4500), 20).unwrap();
        let part_id = part.id.clone();
        catalog.add(part.into()).unwrap();
        let mut shop = PurchaseService::new(catalog, ReportLedger::new());

        let entity = shop.catalog().get(&part_id).unwrap();
        shop.create_invoice(&[LineItem::new(&entity, 5)], "bob", "");

        match shop.catalog().get(&part_id).unwrap() {
            CatalogEntity::Part(p) => assert_eq!(p.stock, 15),
            other => panic!("expected part, got {other:?}"),
        }
    }

    #[test]
    fn test_oversell_clamps_stock_at_zero() {
        let mut catalog = CatalogStore::new();
        let part = Part::new("Spark plug", Money::from_cents(1500), 3).unwrap();
        let part_id = part.id.clone();
        catalog.add(part.into()).unwrap();
        let mut shop = PurchaseService::new(catalog, ReportLedger::new());

        let entity = shop.catalog().get(&part_id).unwrap();
        // Ten requested, three on hand: the sale still completes
        let invoice = shop.create_invoice(&[LineItem::new(&entity, 10)], "bob", "");

        assert_eq!(invoice.subtotal().cents(), 15_000);
        match shop.catalog().get(&part_id).unwrap() {
            CatalogEntity::Part(p) => assert_eq!(p.stock, 0),
            other => panic!("expected part, got {other:?}"),
        }
    }

    #[test]
    fn test_vehicle_purchase_leaves_catalog_untouched() {
        let mut shop = shop_with_corolla();
        let entity = shop.catalog().get("V001").unwrap();

        shop.create_invoice(&[LineItem::new(&entity, 1)], "juanito", "");

        // Vehicles are not consumed on sale
        assert!(shop.catalog().get("V001").is_some());
    }

    #[test]
    fn test_cart_mutation_after_checkout_does_not_touch_invoice() {
        let mut shop = shop_with_corolla();
        let entity = shop.catalog().get("V001").unwrap();

        let mut cart = Cart::new();
        cart.add(&entity, 1);

        let invoice = shop.create_invoice(cart.items(), "juanito", "");
        let total_before = invoice.total();

        cart.add(&entity, 3);
        cart.clear();

        assert_eq!(invoice.items().len(), 1);
        assert_eq!(invoice.total(), total_before);
        // The ledger's copy is equally frozen
        assert_eq!(shop.ledger().invoices()[0].items().len(), 1);
    }

    #[test]
    fn test_plate_is_uppercased_on_checkout() {
        let mut shop = shop_with_corolla();
        let entity = shop.catalog().get("V001").unwrap();

        let invoice = shop.create_invoice(&[LineItem::new(&entity, 1)], "juanito", "abc-123");
        assert_eq!(invoice.plate(), "ABC-123");
    }

    #[test]
    fn test_mixed_cart_only_parts_consume_stock() {
        let mut catalog = CatalogStore::new();
        let vehicle = Vehicle::new(
            "V001",
            "Renault",
            "Kwid 2023",
            Money::from_cents(1_200_000),
            12,
            "per use",
            "",
        )
        .unwrap();
        let part = Part::new("Air filter", Money::from_cents(4500), 20).unwrap();
        let part_id = part.id.clone();
        catalog.add(vehicle.into()).unwrap();
        catalog.add(part.into()).unwrap();
        let mut shop = PurchaseService::new(catalog, ReportLedger::new());

        let v = shop.catalog().get("V001").unwrap();
        let p = shop.catalog().get(&part_id).unwrap();
        let invoice =
            shop.create_invoice(&[LineItem::new(&v, 1), LineItem::new(&p, 2)], "bob", "");

        // subtotal = 12,000.00 + 90.00 = 12,090.00
        assert_eq!(invoice.subtotal().cents(), 1_209_000);
        match shop.catalog().get(&part_id).unwrap() {
            CatalogEntity::Part(p) => assert_eq!(p.stock, 18),
            other => panic!("expected part, got {other:?}"),
        }
        assert!(shop.catalog().get("V001").is_some());
    }

    #[test]
    fn test_invoice_removal_does_not_restore_stock() {
        let mut catalog = CatalogStore::new();
        let part = Part::new("Air filter", Money::from_cents(4500), 20).unwrap();
        let part_id = part.id.clone();
        catalog.add(part.into()).unwrap();
        let mut shop = PurchaseService::new(catalog, ReportLedger::new());

        let entity = shop.catalog().get(&part_id).unwrap();
        let invoice = shop.create_invoice(&[LineItem::new(&entity, 5)], "bob", "");

        assert!(shop.ledger_mut().remove_invoice(invoice.id()));

        // Documented quirk: stock stays decremented
        match shop.catalog().get(&part_id).unwrap() {
            CatalogEntity::Part(p) => assert_eq!(p.stock, 15),
            other => panic!("expected part, got {other:?}"),
        }
    }
}
