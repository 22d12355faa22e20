//! # autolot-core: Pure Business Logic for Autolot
//!
//! This crate is the **heart** of Autolot, an intermediary marketplace for
//! vehicles, spare parts, and insurance policies. It contains all business
//! logic as pure functions and owned stores with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Autolot Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (out of crate)                │   │
//! │  │   collects cart input ──► reads invoices back for display   │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │             ★ autolot-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────────────┐  │   │
//! │  │  │  money  │ │ catalog │ │   cart   │ │    purchase     │  │   │
//! │  │  │  Money  │ │ Catalog │ │   Cart   │ │ PurchaseService │  │   │
//! │  │  │ TaxRate │ │  Store  │ │ LineItem │ │  ReportLedger   │  │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └─────────────────┘  │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (CatalogEntity, LineItem, Invoice)
//! - [`catalog`] - The catalog store (sole owner of sellable entities)
//! - [`cart`] - Ephemeral per-session cart
//! - [`ledger`] - Append-mostly invoice ledger
//! - [`purchase`] - Cart → Invoice checkout flow
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic
//! 2. **No I/O**: File system and network access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), never floats
//! 4. **Owned Stores**: Catalog and ledger own their collections; all
//!    mutation flows through `&mut` methods, never ambient globals
//!
//! ## Example Usage
//!
//! ```rust
//! use autolot_core::money::{Money, TaxRate};
//! use autolot_core::TAX_RATE_BPS;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(2_000_000_00); // $2,000,000.00
//!
//! // The statutory 19% sales tax
//! let tax = price.apply_rate(TaxRate::from_bps(TAX_RATE_BPS));
//! assert_eq!(tax.cents(), 380_000_00);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod purchase;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use autolot_core::Money` instead of
// `use autolot_core::money::Money`

pub use cart::Cart;
pub use catalog::{CatalogPatch, CatalogStore};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::ReportLedger;
pub use money::{Money, TaxRate};
pub use purchase::PurchaseService;
pub use types::{CatalogEntity, EntityKind, InsurancePolicy, Invoice, LineItem, Part, Vehicle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The fixed sales tax rate applied to every invoice, in basis points.
///
/// ## Why a constant?
/// The business operates in a single jurisdiction with a statutory 19% rate.
/// There is deliberately no per-tenant or per-product configurability; the
/// rate is applied exactly once per invoice, at total computation.
pub const TAX_RATE_BPS: u32 = 1900;
