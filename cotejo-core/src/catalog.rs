//! Mock data sources and catalog search
//!
//! Stands in for the public procurement data feeds the real platform
//! would query. Listings are a static in-memory set; searching them is a
//! plain filter over product, source-name or supplier, optionally
//! restricted to a set of selected sources.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::item::Listing;

/// Kind of data source a price can be collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Open government registry, free to query
    Public,
    /// Commercial feed behind a subscription
    Paid,
}

/// A catalog/platform prices are collected from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Stable identifier
    pub id: String,
    /// Display name, also the value carried by listings and line items
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this is a public registry or a paid feed
    pub kind: SourceKind,
    /// Whether the user currently restricts searches to this source
    pub selected: bool,
}

/// Field a catalog search matches the query against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match on the product name
    Product,
    /// Match on the source name (the "Localização" toggle)
    Location,
    /// Match on the supplier name
    Supplier,
}

/// The data sources configured out of the box.
pub fn default_sources() -> Vec<Source> {
    let source = |id: &str, name: &str| Source {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        kind: SourceKind::Public,
        selected: false,
    };

    vec![
        source("1", "PNCP"),
        source("2", "Radar TCE"),
        source("3", "Nota MT"),
        source("4", "E-commerce"),
    ]
}

/// The static in-memory result set the search runs over.
pub fn mock_listings() -> Vec<Listing> {
    let listing = |id: &str, product: &str, supplier: &str, price, source: &str| Listing {
        id: id.to_string(),
        product_name: product.to_string(),
        supplier: supplier.to_string(),
        price,
        source: source.to_string(),
    };

    vec![
        listing("1", "Caneta esferográfica azul", "Papelaria Central Ltda", dec!(1.85), "PNCP"),
        listing("2", "Caneta esferográfica azul", "Mato Grosso Suprimentos", dec!(2.10), "Radar TCE"),
        listing("3", "Caneta esferográfica azul", "Atacadão do Escritório", dec!(1.99), "E-commerce"),
        listing("4", "Papel sulfite A4 75g (resma)", "Papelaria Central Ltda", dec!(22.90), "PNCP"),
        listing("5", "Papel sulfite A4 75g (resma)", "Distribuidora Pantanal", dec!(24.50), "Nota MT"),
        listing("6", "Papel sulfite A4 75g (resma)", "Atacadão do Escritório", dec!(21.75), "E-commerce"),
        listing("7", "Grampeador de mesa 26/6", "Mato Grosso Suprimentos", dec!(18.40), "Radar TCE"),
        listing("8", "Grampeador de mesa 26/6", "Distribuidora Pantanal", dec!(19.90), "Nota MT"),
        listing("9", "Toner preto compatível", "Cuiabá Informática", dec!(89.00), "PNCP"),
        listing("10", "Toner preto compatível", "Atacadão do Escritório", dec!(94.90), "E-commerce"),
        listing("11", "Caixa de clipes 2/0 (100 un)", "Papelaria Central Ltda", dec!(3.25), "PNCP"),
        listing("12", "Caixa de clipes 2/0 (100 un)", "Mato Grosso Suprimentos", dec!(3.60), "Radar TCE"),
        listing("13", "Pasta suspensa kraft", "Distribuidora Pantanal", dec!(2.95), "Nota MT"),
        listing("14", "Pasta suspensa kraft", "Atacadão do Escritório", dec!(2.80), "E-commerce"),
    ]
}

/// Filter listings by selected sources, then by a query on the active
/// field.
///
/// An empty `selected_sources` slice means "all sources"; source names
/// compare case-insensitively. An empty query returns the source-filtered
/// set unchanged.
pub fn search(
    listings: &[Listing],
    query: &str,
    field: SearchField,
    selected_sources: &[String],
) -> Vec<Listing> {
    let by_source = |listing: &Listing| {
        selected_sources.is_empty()
            || selected_sources.iter().any(|s| s.eq_ignore_ascii_case(&listing.source))
    };

    let query = query.to_lowercase();
    let by_query = |listing: &Listing| {
        if query.is_empty() {
            return true;
        }
        let haystack = match field {
            SearchField::Product => &listing.product_name,
            SearchField::Location => &listing.source,
            SearchField::Supplier => &listing.supplier,
        };
        haystack.to_lowercase().contains(&query)
    };

    listings.iter().filter(|l| by_source(l) && by_query(l)).cloned().collect()
}
