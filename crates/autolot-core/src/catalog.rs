//! # Catalog Store
//!
//! The single owner of every sellable entity.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        CatalogStore                                 │
//! │                                                                     │
//! │   vehicles: { "V001" → Vehicle, ... }     ← admin-assigned ids      │
//! │   parts:    { uuid → Part, ... }          ← finite stock lives here │
//! │   policies: { uuid → InsurancePolicy }                              │
//! │                                                                     │
//! │   Every caller gets the store by &/&mut handle. There is no         │
//! │   ambient/global catalog; whoever needs to mutate it is handed      │
//! │   the one owner. A future concurrent port would wrap exactly        │
//! │   this struct in its serialization boundary.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive Mutation Contract
//! Mutations targeting a missing id are expected (a stale admin listing,
//! a concurrent delete in another dialog) and report via `bool`/no-op
//! returns rather than errors. The one real conflict is `add` on a taken
//! id, which is a typed [`CoreError::DuplicateId`].
//!
//! Stock decrement deliberately never rejects oversell: it floors at zero.
//! This is inherited permissive behavior, kept on purpose; see DESIGN.md.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogEntity, InsurancePolicy, Part, Vehicle};

// =============================================================================
// Catalog Patch
// =============================================================================

/// Partial-update payload for [`CatalogStore::edit`].
///
/// Only `Some` fields are applied, and only those that exist on the target
/// entity's variant; the rest are ignored rather than erroring. This mirrors
/// how the admin dialogs submit: every field optional, unknowns dropped.
#[derive(Debug, Clone, Default)]
pub struct CatalogPatch {
    // Common
    pub price_cents: Option<i64>,
    // Vehicle
    pub brand: Option<String>,
    pub model: Option<String>,
    pub warranty_months: Option<u32>,
    pub maintenance: Option<String>,
    pub description: Option<String>,
    // Part
    pub name: Option<String>,
    pub stock: Option<i64>,
    // InsurancePolicy
    pub tier: Option<String>,
    pub validity_months: Option<u32>,
}

impl CatalogPatch {
    /// Convenience patch that changes only the price.
    pub fn price(cents: i64) -> Self {
        CatalogPatch {
            price_cents: Some(cents),
            ..Default::default()
        }
    }
}

// =============================================================================
// Catalog Store
// =============================================================================

/// In-memory catalog of vehicles, parts, and insurance policies.
///
/// Identifiers are unique **within a variant's collection**; a vehicle and
/// a part may share an id without conflict (they never did in practice, but
/// the uniqueness contract is per collection).
///
/// ## Usage
/// ```rust
/// use autolot_core::{CatalogStore, Money, Part};
///
/// let mut catalog = CatalogStore::new();
/// let part = Part::new("Air filter", Money::from_cents(4500), 20).unwrap();
/// let part_id = part.id.clone();
/// catalog.add(part.into()).unwrap();
///
/// catalog.decrement_stock(&part_id, 5);
/// ```
#[derive(Debug, Default)]
pub struct CatalogStore {
    vehicles: BTreeMap<String, Vehicle>,
    parts: BTreeMap<String, Part>,
    policies: BTreeMap<String, InsurancePolicy>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogStore::default()
    }

    /// Inserts an entity into its variant's collection.
    ///
    /// ## Returns
    /// * `Ok(())` - inserted
    /// * `Err(CoreError::DuplicateId)` - the id is already taken within
    ///   that variant's collection
    pub fn add(&mut self, entity: CatalogEntity) -> CoreResult<()> {
        let id = entity.id().to_string();
        debug!(id = %id, kind = %entity.kind(), "Adding catalog entity");

        match entity {
            CatalogEntity::Vehicle(v) => Self::insert_unique(&mut self.vehicles, id, v),
            CatalogEntity::Part(p) => Self::insert_unique(&mut self.parts, id, p),
            CatalogEntity::InsurancePolicy(s) => Self::insert_unique(&mut self.policies, id, s),
        }
    }

    fn insert_unique<T>(map: &mut BTreeMap<String, T>, id: String, value: T) -> CoreResult<()> {
        if map.contains_key(&id) {
            return Err(CoreError::DuplicateId { id });
        }
        map.insert(id, value);
        Ok(())
    }

    /// Looks up an entity by id, searching vehicles, then parts, then
    /// policies.
    pub fn get(&self, id: &str) -> Option<CatalogEntity> {
        if let Some(v) = self.vehicles.get(id) {
            return Some(CatalogEntity::Vehicle(v.clone()));
        }
        if let Some(p) = self.parts.get(id) {
            return Some(CatalogEntity::Part(p.clone()));
        }
        self.policies
            .get(id)
            .map(|s| CatalogEntity::InsurancePolicy(s.clone()))
    }

    /// Read-only snapshot of the whole catalog.
    ///
    /// Order is stable: vehicles, then parts, then policies, each sorted by
    /// id. Calling twice without intervening mutation yields equal vectors;
    /// the snapshot never reflects later mutation.
    pub fn list(&self) -> Vec<CatalogEntity> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.vehicles.values().cloned().map(CatalogEntity::Vehicle));
        out.extend(self.parts.values().cloned().map(CatalogEntity::Part));
        out.extend(
            self.policies
                .values()
                .cloned()
                .map(CatalogEntity::InsurancePolicy),
        );
        out
    }

    /// Snapshot of the vehicle listings.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.values().cloned().collect()
    }

    /// Snapshot of the spare parts.
    pub fn parts(&self) -> Vec<Part> {
        self.parts.values().cloned().collect()
    }

    /// Snapshot of the insurance policies.
    pub fn policies(&self) -> Vec<InsurancePolicy> {
        self.policies.values().cloned().collect()
    }

    /// Total number of entities across all collections.
    pub fn len(&self) -> usize {
        self.vehicles.len() + self.parts.len() + self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the provided (`Some`) patch fields to the entity with this
    /// id. Patch fields that don't exist on the entity's variant are
    /// ignored.
    ///
    /// ## Returns
    /// `false` if the id is absent (no-op, not an error).
    pub fn edit(&mut self, id: &str, patch: &CatalogPatch) -> bool {
        if let Some(v) = self.vehicles.get_mut(id) {
            if let Some(cents) = patch.price_cents {
                v.price_cents = cents;
            }
            if let Some(brand) = &patch.brand {
                v.brand = brand.clone();
            }
            if let Some(model) = &patch.model {
                v.model = model.clone();
            }
            if let Some(months) = patch.warranty_months {
                v.warranty_months = months;
            }
            if let Some(maintenance) = &patch.maintenance {
                v.maintenance = maintenance.clone();
            }
            if let Some(description) = &patch.description {
                v.description = description.clone();
            }
            debug!(id = %id, "Edited vehicle");
            return true;
        }

        if let Some(p) = self.parts.get_mut(id) {
            if let Some(cents) = patch.price_cents {
                p.price_cents = cents;
            }
            if let Some(name) = &patch.name {
                p.name = name.clone();
            }
            if let Some(stock) = patch.stock {
                p.stock = stock.max(0);
            }
            debug!(id = %id, "Edited part");
            return true;
        }

        if let Some(s) = self.policies.get_mut(id) {
            if let Some(cents) = patch.price_cents {
                s.price_cents = cents;
            }
            if let Some(tier) = &patch.tier {
                s.tier = tier.clone();
            }
            if let Some(months) = patch.validity_months {
                s.validity_months = months;
            }
            debug!(id = %id, "Edited insurance policy");
            return true;
        }

        false
    }

    /// Removes the entity with this id from whichever collection holds it.
    ///
    /// ## Returns
    /// `false` if the id is absent. Deleting twice is safe; delete is
    /// idempotent from the caller's point of view.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.vehicles.remove(id).is_some()
            || self.parts.remove(id).is_some()
            || self.policies.remove(id).is_some();
        if removed {
            debug!(id = %id, "Deleted catalog entity");
        }
        removed
    }

    /// Decrements a part's stock by `quantity`, flooring at zero.
    ///
    /// ## Permissive by Contract
    /// - Id absent: silent no-op
    /// - Id belongs to a vehicle or policy: silent no-op (they have no
    ///   stock to decrement)
    /// - `quantity` exceeds available stock: result is 0, never negative,
    ///   and never an error — oversell is not rejected here
    pub fn decrement_stock(&mut self, id: &str, quantity: i64) {
        if let Some(part) = self.parts.get_mut(id) {
            let before = part.stock;
            part.stock = (part.stock - quantity.max(0)).max(0);
            debug!(id = %id, before = before, after = part.stock, "Decremented part stock");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
