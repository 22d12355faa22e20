//! # Report Ledger
//!
//! Append-mostly collection of finalized invoices.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        ReportLedger                                 │
//! │                                                                     │
//! │  log_invoice    append, no dedup, trusts the purchase flow          │
//! │  total_sales    Σ invoice.total across everything logged            │
//! │  invoices_for   one buyer's invoices, in logging order              │
//! │  remove_invoice admin removal; stock is NOT restored                │
//! │  attach_plate   the single permitted late mutation                  │
//! │                                                                     │
//! │  Invoices have no status field. Presence here means the sale        │
//! │  completed; absence means it never happened (or an admin removed    │
//! │  the record, which deliberately leaves stock untouched).            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insertion order is the only defined order; queries never re-sort.

use tracing::{debug, info};

use crate::money::Money;
use crate::types::Invoice;

/// In-memory invoice ledger.
#[derive(Debug, Default)]
pub struct ReportLedger {
    invoices: Vec<Invoice>,
}

impl ReportLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        ReportLedger::default()
    }

    /// Appends an invoice. No deduplication, no content validation: the
    /// purchase flow is the only writer and is trusted.
    pub fn log_invoice(&mut self, invoice: Invoice) {
        info!(
            invoice_id = %invoice.id(),
            buyer = %invoice.buyer_username(),
            total = %invoice.total(),
            "Invoice logged"
        );
        self.invoices.push(invoice);
    }

    /// Sum of `total` across all logged invoices.
    pub fn total_sales(&self) -> Money {
        self.invoices.iter().map(Invoice::total).sum()
    }

    /// All invoices for one buyer, in logging order.
    pub fn invoices_for(&self, username: &str) -> Vec<&Invoice> {
        self.invoices
            .iter()
            .filter(|inv| inv.buyer_username() == username)
            .collect()
    }

    /// Every logged invoice, in logging order (admin reports).
    #[inline]
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Administrative removal of an invoice record.
    ///
    /// Removal has no cascading effect: part stock already decremented by
    /// the sale is NOT restored. That asymmetry is inherited, documented
    /// behavior.
    ///
    /// ## Returns
    /// `false` if no invoice carries this id.
    pub fn remove_invoice(&mut self, invoice_id: &str) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|inv| inv.id() != invoice_id);
        let removed = self.invoices.len() != before;
        if removed {
            debug!(invoice_id = %invoice_id, "Invoice removed from ledger");
        }
        removed
    }

    /// Attaches (or replaces) the registration plate on a logged invoice.
    /// The plate is uppercased. This is the only mutation an invoice
    /// accepts after construction.
    ///
    /// ## Returns
    /// `false` if no invoice carries this id.
    pub fn attach_plate(&mut self, invoice_id: &str, plate: &str) -> bool {
        match self.invoices.iter_mut().find(|inv| inv.id() == invoice_id) {
            Some(inv) => {
                inv.set_plate(plate);
                debug!(invoice_id = %invoice_id, plate = %inv.plate(), "Plate attached");
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
