//! Exact monetary math for price quotations
//!
//! This crate provides the numeric foundation for Cotejo: decimal
//! arithmetic over `rust_decimal::Decimal` (so money never touches binary
//! floating point), fixed-rule rounding, display formatting in both plain
//! and pt-BR styles, and the spelled-out ("por extenso") rendering of
//! currency totals used in technical reports.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod extenso;
pub mod formatting;
pub mod money;

// Re-export main entry points
pub use extenso::{por_extenso, valor_por_extenso};
pub use formatting::{
    format_currency, format_currency_br, format_decimal, format_plain, FormatConfig,
};
pub use money::{mean, round2, MONEY_SCALE};

// Re-export for convenience
pub use rust_decimal::Decimal;
