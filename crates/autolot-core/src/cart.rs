//! # Cart
//!
//! The ephemeral, per-session shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  Session Action           Cart Change                               │
//! │  ──────────────           ───────────                               │
//! │  Pick catalog entry ────► items.push(snapshot × qty)                │
//! │  Remove a line ─────────► items.retain(id mismatch)                 │
//! │  Clear / logout ────────► items.clear()                             │
//! │  Checkout ──────────────► PurchaseService reads items, caller       │
//! │                           clears afterwards                         │
//! │                                                                     │
//! │  The cart is never persisted. It lives and dies with the session.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding an entity snapshots it (see [`LineItem`]), so a vehicle in the
//! cart is a private clone, never the catalog's live copy.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CatalogEntity, LineItem};

/// Ordered sequence of line items for the active session.
///
/// Lines keep insertion order; picking the same entity twice appends a
/// second line rather than merging quantities, matching how the order is
/// reviewed at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Snapshots `entity` into the cart with the given quantity.
    pub fn add(&mut self, entity: &CatalogEntity, quantity: i64) {
        self.items.push(LineItem::new(entity, quantity));
    }

    /// Removes every line referencing this entity id.
    ///
    /// ## Returns
    /// `false` if no line matched.
    pub fn remove(&mut self, entity_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.entity().id() != entity_id);
        self.items.len() != before
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines (not total quantity).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pre-tax running total shown while shopping. The authoritative
    /// totals are computed once, by the invoice.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
