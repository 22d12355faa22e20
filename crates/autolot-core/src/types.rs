//! # Domain Types
//!
//! Core domain types used throughout Autolot.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  CatalogEntity (closed enum)                                        │
//! │  ├── Vehicle          brand, model, warranty, maintenance           │
//! │  ├── Part             name, stock  ← the only finite inventory      │
//! │  └── InsurancePolicy  tier, validity                                │
//! │                                                                     │
//! │  LineItem   = snapshotted entity × quantity                         │
//! │  Invoice    = buyer + line items + subtotal/tax/total (frozen)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Closed Enum?
//! Stock handling must be a compile-time-checked branch on the variant,
//! not a runtime "does this thing have a stock field?" probe. Adding a
//! fourth sellable kind forces every `match` in the crate to be revisited,
//! which is exactly what we want.
//!
//! ## Snapshot Pattern
//! Putting an entity in a cart clones it. The catalog keeps the only live
//! copy (and the only live stock count); cart and invoice lines freeze the
//! price and description at add time, so later catalog edits never rewrite
//! history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::{Money, TaxRate};
use crate::validation::validate_price_cents;
use crate::TAX_RATE_BPS;

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle listed for sale.
///
/// Vehicles are not consumed on sale (the dealer is an intermediary), so
/// they carry no stock count. They do carry warranty and maintenance terms
/// that end up on the invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Business identifier, supplied by the administrator (e.g. "V001").
    pub id: String,
    pub brand: String,
    pub model: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Warranty period in months.
    pub warranty_months: u32,
    /// Free-text maintenance tag ("free", "per use", "mandatory", ...).
    pub maintenance: String,
    pub description: String,
}

impl Vehicle {
    /// Factory for a vehicle listing. Fails only on a negative price; field
    /// presence is the presentation layer's job.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        price: Money,
        warranty_months: u32,
        maintenance: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        validate_price_cents(price.cents())?;
        Ok(Vehicle {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            price_cents: price.cents(),
            warranty_months,
            maintenance: maintenance.into(),
            description: description.into(),
        })
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Part
// =============================================================================

/// A spare part with finite inventory.
///
/// The only catalog variant that is consumed on sale. Stock is clamped at
/// zero by every mutation path; it can never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Generated UUID v4.
    pub id: String,
    pub name: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Units on hand. Never negative.
    pub stock: i64,
}

impl Part {
    /// Factory for a spare part. The id is generated; stock below zero is
    /// floored immediately so the invariant holds from birth.
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Result<Self, ValidationError> {
        validate_price_cents(price.cents())?;
        Ok(Part {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price_cents: price.cents(),
            stock: stock.max(0),
        })
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Insurance Policy
// =============================================================================

/// An insurance product sold alongside vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Generated UUID v4.
    pub id: String,
    /// Tier label ("Comprehensive", "Basic", ...).
    pub tier: String,
    /// Unit price in cents.
    pub price_cents: i64,
    /// Validity period in months.
    pub validity_months: u32,
}

impl InsurancePolicy {
    /// Factory for an insurance policy. The id is generated.
    pub fn new(
        tier: impl Into<String>,
        price: Money,
        validity_months: u32,
    ) -> Result<Self, ValidationError> {
        validate_price_cents(price.cents())?;
        Ok(InsurancePolicy {
            id: Uuid::new_v4().to_string(),
            tier: tier.into(),
            price_cents: price.cents(),
            validity_months,
        })
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog Entity
// =============================================================================

/// Which collection an entity lives in. Also the display label on reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vehicle,
    Part,
    InsurancePolicy,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Vehicle => write!(f, "vehicle"),
            EntityKind::Part => write!(f, "part"),
            EntityKind::InsurancePolicy => write!(f, "insurance"),
        }
    }
}

/// Anything sellable: the closed union over the three catalog variants.
///
/// Every behavioral difference between the variants (inventory, invoice
/// labelling) is an exhaustive `match` on this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntity {
    Vehicle(Vehicle),
    Part(Part),
    InsurancePolicy(InsurancePolicy),
}

impl CatalogEntity {
    /// Returns the entity's identifier.
    pub fn id(&self) -> &str {
        match self {
            CatalogEntity::Vehicle(v) => &v.id,
            CatalogEntity::Part(p) => &p.id,
            CatalogEntity::InsurancePolicy(s) => &s.id,
        }
    }

    /// Returns the unit price.
    pub fn unit_price(&self) -> Money {
        match self {
            CatalogEntity::Vehicle(v) => v.price(),
            CatalogEntity::Part(p) => p.price(),
            CatalogEntity::InsurancePolicy(s) => s.price(),
        }
    }

    /// Returns which variant collection this entity belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogEntity::Vehicle(_) => EntityKind::Vehicle,
            CatalogEntity::Part(_) => EntityKind::Part,
            CatalogEntity::InsurancePolicy(_) => EntityKind::InsurancePolicy,
        }
    }

    /// Human-readable one-line label for carts and invoice lines.
    pub fn label(&self) -> String {
        match self {
            CatalogEntity::Vehicle(v) => format!("{} {}", v.brand, v.model),
            CatalogEntity::Part(p) => p.name.clone(),
            CatalogEntity::InsurancePolicy(s) => format!("{} insurance", s.tier),
        }
    }
}

impl From<Vehicle> for CatalogEntity {
    fn from(v: Vehicle) -> Self {
        CatalogEntity::Vehicle(v)
    }
}

impl From<Part> for CatalogEntity {
    fn from(p: Part) -> Self {
        CatalogEntity::Part(p)
    }
}

impl From<InsurancePolicy> for CatalogEntity {
    fn from(s: InsurancePolicy) -> Self {
        CatalogEntity::InsurancePolicy(s)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A quantity of one catalog entity, owned by a cart or invoice.
///
/// ## Snapshot Semantics
/// The entity is cloned at construction. In particular a vehicle placed in
/// a cart never aliases the catalog's copy, so editing the listing while a
/// buyer is mid-checkout cannot rewrite the buyer's cart. Live stock stays
/// with the catalog; decrements go through the store by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    entity: CatalogEntity,
    quantity: i64,
}

impl LineItem {
    /// Snapshots `entity` with the given quantity. Quantities below one are
    /// floored to one; range policing belongs to the caller.
    pub fn new(entity: &CatalogEntity, quantity: i64) -> Self {
        LineItem {
            entity: entity.clone(),
            quantity: quantity.max(1),
        }
    }

    /// The frozen entity snapshot.
    #[inline]
    pub fn entity(&self) -> &CatalogEntity {
        &self.entity
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `unit_price × quantity`, exact integer product (never rounded).
    pub fn line_total(&self) -> Money {
        self.entity.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A finalized sale.
///
/// ## Lifecycle
/// Constructed exactly once from a cart snapshot; totals are computed in
/// the constructor and never touched again. The only permitted late
/// mutation is attaching a registration plate, and that goes through the
/// ledger which owns the logged copy. There is no status field: presence
/// in the ledger means "completed sale".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: String,
    buyer_username: String,
    items: Vec<LineItem>,
    created_at: DateTime<Utc>,
    subtotal_cents: i64,
    tax_cents: i64,
    total_cents: i64,
    plate: String,
}

impl Invoice {
    /// Builds a totaled invoice from a cart snapshot.
    ///
    /// ## Totals Contract
    /// ```text
    /// subtotal = Σ line_total          (exact)
    /// tax      = round(subtotal × 19%) (half-up at the cent, once)
    /// total    = subtotal + tax        (exact)
    /// ```
    /// An empty item list is allowed and produces a zero-total invoice;
    /// rejecting empty carts is the caller's decision, not this type's.
    pub(crate) fn build(buyer_username: &str, items: Vec<LineItem>, plate: &str) -> Self {
        let subtotal: Money = items.iter().map(LineItem::line_total).sum();
        let tax = subtotal.apply_rate(TaxRate::from_bps(TAX_RATE_BPS));
        let total = subtotal + tax;

        Invoice {
            id: Uuid::new_v4().to_string(),
            buyer_username: buyer_username.to_string(),
            items,
            created_at: Utc::now(),
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
            plate: plate.to_uppercase(),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn buyer_username(&self) -> &str {
        &self.buyer_username
    }

    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Registration plate, empty until attached.
    #[inline]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// The single permitted late mutation. Ledger-only.
    pub(crate) fn set_plate(&mut self, plate: &str) {
        self.plate = plate.to_uppercase();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Vehicle {
        Vehicle::new(
            "V001",
            "Toyota",
            "Corolla 2024",
            Money::from_cents(4_500_000),
            24,
            "free",
            "Compact sedan",
        )
        .unwrap()
    }

    #[test]
    fn test_factories_reject_negative_price() {
        assert!(Vehicle::new("V9", "X", "Y", Money::from_cents(-1), 0, "", "").is_err());
        assert!(Part::new("Air filter", Money::from_cents(-100), 5).is_err());
        assert!(InsurancePolicy::new("Basic", Money::from_cents(-1), 12).is_err());
    }

    #[test]
    fn test_part_factory_floors_stock() {
        let part = Part::new("Spark plug", Money::from_cents(1500), -3).unwrap();
        assert_eq!(part.stock, 0);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Part::new("A", Money::from_cents(100), 1).unwrap();
        let b = Part::new("A", Money::from_cents(100), 1).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entity_accessors() {
        let entity: CatalogEntity = corolla().into();
        assert_eq!(entity.id(), "V001");
        assert_eq!(entity.unit_price().cents(), 4_500_000);
        assert_eq!(entity.kind(), EntityKind::Vehicle);
        assert_eq!(entity.label(), "Toyota Corolla 2024");
    }

    #[test]
    fn test_line_total_is_exact_product() {
        let part = Part::new("Spark plug", Money::from_cents(1500), 50).unwrap();
        let line = LineItem::new(&CatalogEntity::Part(part), 4);
        assert_eq!(line.line_total().cents(), 6000);
    }

    #[test]
    fn test_line_item_floors_quantity_at_one() {
        let entity: CatalogEntity = corolla().into();
        let line = LineItem::new(&entity, 0);
        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn test_line_item_snapshot_does_not_alias_source() {
        let mut vehicle = corolla();
        let line = LineItem::new(&CatalogEntity::Vehicle(vehicle.clone()), 1);

        vehicle.price_cents = 1;
        assert_eq!(line.line_total().cents(), 4_500_000);
    }

    #[test]
    fn test_invoice_totals_scenario_a() {
        // Vehicle at $20,000.00, qty 1 → tax $3,800.00, total $23,800.00
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
        let line = LineItem::new(&CatalogEntity::Vehicle(vehicle), 1);

        let invoice = Invoice::build("juanito", vec![line], "");
        assert_eq!(invoice.subtotal().cents(), 2_000_000);
        assert_eq!(invoice.tax().cents(), 380_000);
        assert_eq!(invoice.total().cents(), 2_380_000);
    }

    #[test]
    fn test_invoice_empty_items_zero_totals() {
        let invoice = Invoice::build("alice", Vec::new(), "");
        assert!(invoice.subtotal().is_zero());
        assert!(invoice.tax().is_zero());
        assert!(invoice.total().is_zero());
    }

    #[test]
    fn test_invoice_uppercases_plate() {
        let invoice = Invoice::build("alice", Vec::new(), "abc-123");
        assert_eq!(invoice.plate(), "ABC-123");
    }
}
