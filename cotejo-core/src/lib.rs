//! Core engine for comparative price quotations
//!
//! This crate implements the quotation pipeline used to prepare
//! public-procurement price maps: a mock catalog of listings across public
//! data sources, an in-memory selection of saved line items, the
//! aggregator that folds those items into per-product price summaries, and
//! the Markdown report renderer with its technical narrative.
//!
//! Data flows one way: line items -> [`aggregate::group_items`] ->
//! grouped products -> [`report::render_report`] -> exportable text.

#![warn(clippy::all)]
#![warn(missing_docs)]

/// Module for grouping line items into per-product summaries
pub mod aggregate;

/// Module for the mock data sources and catalog search
pub mod catalog;

/// Module for report file export and line-item input loading
pub mod export;

/// Module for the quotation data model
pub mod item;

/// Module for Markdown report rendering
pub mod report;

/// Module for the in-memory saved-items list
pub mod selection;

// Re-export main entry points
pub use aggregate::{group_items, total_budget};
pub use catalog::{default_sources, mock_listings, search, SearchField, Source, SourceKind};
pub use export::{export_report, read_items, report_file_name, ExportError, ExportResult};
pub use item::{GroupedProduct, LineItem, Listing, PriceObservation};
pub use report::{render_report, write_report, ReportOptions};
pub use selection::Selection;
