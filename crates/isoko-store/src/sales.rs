//! # Sale Log
//!
//! Append-only record of committed sales. Entries are never mutated or
//! deleted; the only writer is the sale commit on the `Store` facade.

use isoko_core::Sale;
use tracing::debug;

/// Append-only sale log.
#[derive(Debug, Clone, Default)]
pub struct SaleLog {
    sales: Vec<Sale>,
}

impl SaleLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        SaleLog { sales: Vec::new() }
    }

    /// Appends a committed sale. Crate-internal: callers go through
    /// `Store::commit_sale`.
    pub(crate) fn append(&mut self, sale: Sale) {
        debug!(id = %sale.id, total = %sale.total, "Sale appended");
        self.sales.push(sale);
    }

    /// All sales, oldest first.
    pub fn all(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of recorded sales.
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Checks if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
