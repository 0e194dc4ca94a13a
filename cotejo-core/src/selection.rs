//! In-memory saved-items list for a bid under preparation
//!
//! [`Selection`] owns the line items a user has marked "saved for bid".
//! It has no persistence; the state lives only as long as the value, and
//! grouped views are recomputed from it on demand.

use log::debug;

use crate::aggregate::group_items;
use crate::item::{GroupedProduct, LineItem, Listing};

/// Saved line items selected for a bid, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<LineItem>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a listing as a line item.
    ///
    /// Adding the same listing id twice is a no-op; returns whether the
    /// item was actually added.
    pub fn add(&mut self, listing: Listing) -> bool {
        if self.items.iter().any(|item| item.id == listing.id) {
            debug!("listing {} already saved, ignoring", listing.id);
            return false;
        }
        self.items.push(LineItem::from(listing));
        true
    }

    /// Remove the single occurrence with the given id.
    ///
    /// Sibling occurrences of the same product under other ids are
    /// untouched. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Set the requested quantity for every occurrence of a product.
    ///
    /// Quantity is a per-product decision, so it is written onto each
    /// occurrence sharing the name; non-positive input coerces to 1.
    /// Returns how many occurrences were updated.
    pub fn set_quantity(&mut self, product_name: &str, quantity: u32) -> usize {
        let quantity = quantity.max(1);
        let mut updated = 0;
        for item in self.items.iter_mut().filter(|i| i.product_name == product_name) {
            item.quantity = Some(quantity);
            updated += 1;
        }
        updated
    }

    /// The saved line items, in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of saved occurrences
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recompute the grouped per-product view over the current items.
    pub fn grouped(&self) -> Vec<GroupedProduct> {
        group_items(&self.items)
    }
}
