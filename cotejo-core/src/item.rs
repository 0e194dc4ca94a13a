//! Data model for quotation line items and their aggregated view
//!
//! A [`LineItem`] is one saved occurrence of a product under a specific
//! source and supplier. A [`GroupedProduct`] is the derived, per-product
//! view the aggregator recomputes from scratch on every call; it carries
//! no identity of its own and is never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog search result: one product listing offered by a supplier on a
/// given data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Stable identifier of this listing
    pub id: String,
    /// Product name as published by the source
    pub product_name: String,
    /// Vendor offering this price
    pub supplier: String,
    /// Unit price
    pub price: Decimal,
    /// Catalog/platform the listing came from
    pub source: String,
}

/// One saved product occurrence tied to a specific source and supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier of this occurrence (not of the product name)
    pub id: String,
    /// Grouping key, matched by exact string equality
    pub product_name: String,
    /// Vendor offering this price
    pub supplier: String,
    /// Catalog/platform the price was observed on
    pub source: String,
    /// Unit price
    pub price: Decimal,
    /// Requested quantity for the whole product group; absent or zero
    /// falls back to 1 at aggregation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl From<Listing> for LineItem {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            product_name: listing.product_name,
            supplier: listing.supplier,
            source: listing.source,
            price: listing.price,
            quantity: None,
        }
    }
}

/// A `(source, price, supplier)` triple attached to a grouped product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceObservation {
    /// Catalog/platform the price was observed on
    pub source: String,
    /// Observed unit price
    pub price: Decimal,
    /// Vendor offering this price
    pub supplier: String,
}

/// Aggregated view of all line items sharing a product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedProduct {
    /// Grouping key
    pub product_name: String,
    /// Resolved requested quantity, always at least 1
    pub quantity: u32,
    /// Insertion-ordered observations, unique by `(source, supplier)`
    pub prices: Vec<PriceObservation>,
    /// Mean of the observed prices, rounded to two decimal places
    pub average_price: Decimal,
    /// `average_price * quantity`, rounded to two decimal places
    pub total_value: Decimal,
}

impl GroupedProduct {
    /// First observation recorded for `source`, if any.
    ///
    /// Several suppliers may have been observed under the same source; the
    /// earliest saved observation wins.
    pub fn price_for_source(&self, source: &str) -> Option<&PriceObservation> {
        self.prices.iter().find(|p| p.source == source)
    }
}
