//! The shopping cart.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::Clock;
use crate::logging::debug;
use crate::model::{CartLine, NewCartLine};
use crate::storage::{JsonStore, StorageError, keys};

use super::list::PersistedList;
use super::totals::CartTotals;

/// Disambiguates lines created within the same millisecond.
static LINE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Persisted cart of [`CartLine`]s, in insertion order.
pub struct Cart {
    lines: PersistedList<CartLine>,
    clock: Arc<dyn Clock>,
}

impl Cart {
    pub fn new(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            lines: PersistedList::new(store, keys::CART),
            clock,
        }
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.load()
    }

    pub fn line(&self, line_id: &str) -> Option<CartLine> {
        self.lines.load().into_iter().find(|l| l.id == line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.load().is_empty()
    }

    /// Append a new line and return it.
    ///
    /// Never merges with an existing line for the same product.
    pub fn add_line(&self, item: NewCartLine) -> Result<CartLine, StorageError> {
        let id = format!(
            "{}-{}-{}",
            item.product_id,
            self.clock.now_millis(),
            LINE_SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let line = item.into_line(id);
        debug!(line_id = %line.id, product_id = %line.product_id, "adding cart line");

        self.lines.update(|lines| {
            lines.push(line.clone());
            ((), true)
        })?;
        Ok(line)
    }

    /// Set the quantity of a line.
    ///
    /// The caller checks `quantity` against stock before calling; values
    /// below 1 are raised to 1. Returns `false` when no line has `line_id`.
    pub fn set_quantity(&self, line_id: &str, quantity: u32) -> Result<bool, StorageError> {
        self.lines.update(|lines| {
            match lines.iter_mut().find(|l| l.id == line_id) {
                Some(line) => {
                    line.quantity = quantity.max(1);
                    (true, true)
                }
                None => (false, false),
            }
        })
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_line(&self, line_id: &str) -> Result<(), StorageError> {
        self.lines.update(|lines| {
            let before = lines.len();
            lines.retain(|l| l.id != line_id);
            ((), lines.len() != before)
        })
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.lines.clear()
    }

    /// Σ(price × quantity) over all lines, unrounded.
    pub fn total(&self) -> f64 {
        self.lines.load().iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .load()
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.lines.load())
    }
}
