//! Grouping of saved line items into per-product price summaries
//!
//! [`group_items`] is a pure function over its input: it owns no state,
//! performs no I/O and recomputing it over the same items always produces
//! the same groups, regardless of how duplicates were interleaved.

use std::collections::HashMap;

use rust_decimal::Decimal;

use cotejo_math::{mean, round2};

use crate::item::{GroupedProduct, LineItem, PriceObservation};

/// Fold a flat list of line items into one summary per distinct product
/// name, in first-seen order.
///
/// Grouping compares product names by exact string equality; no trimming
/// or case folding is applied. Within a group:
///
/// - the quantity of the first item carrying one wins, with zero coerced
///   to 1; items without a quantity contribute nothing, and a group where
///   no item carries one defaults to 1;
/// - only the first observation per distinct `(source, supplier)` pair is
///   kept, later duplicates are dropped silently;
/// - `average_price` is the rounded mean of the kept observations and
///   `total_value` is the rounded product `average_price * quantity`.
///
/// Prices are taken as-is; validating them is the caller's concern.
pub fn group_items(items: &[LineItem]) -> Vec<GroupedProduct> {
    let mut groups: Vec<GroupedProduct> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let position = match index.get(item.product_name.as_str()) {
            Some(&position) => position,
            None => {
                groups.push(GroupedProduct {
                    product_name: item.product_name.clone(),
                    // zero marks "not resolved yet"; every resolved
                    // quantity is at least 1
                    quantity: 0,
                    prices: Vec::new(),
                    average_price: Decimal::ZERO,
                    total_value: Decimal::ZERO,
                });
                index.insert(item.product_name.as_str(), groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[position];

        if group.quantity == 0 {
            if let Some(quantity) = item.quantity {
                group.quantity = quantity.max(1);
            }
        }

        let duplicate = group
            .prices
            .iter()
            .any(|p| p.source == item.source && p.supplier == item.supplier);
        if !duplicate {
            group.prices.push(PriceObservation {
                source: item.source.clone(),
                price: item.price,
                supplier: item.supplier.clone(),
            });
        }
    }

    for group in &mut groups {
        if group.quantity == 0 {
            group.quantity = 1;
        }

        let prices: Vec<Decimal> = group.prices.iter().map(|p| p.price).collect();
        group.average_price = round2(mean(&prices).unwrap_or(Decimal::ZERO));
        group.total_value = round2(group.average_price * Decimal::from(group.quantity));
    }

    groups
}

/// Total estimated budget: the sum of the already-rounded per-group
/// totals.
///
/// The sum is intentionally not recomputed from the raw observations;
/// per-group rounding drift is part of the report's arithmetic.
pub fn total_budget(groups: &[GroupedProduct]) -> Decimal {
    groups.iter().map(|g| g.total_value).sum()
}
