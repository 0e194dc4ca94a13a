//! Display formatting for monetary values
//!
//! Two styles coexist: the plain decimal-point rendering used inside
//! exported Markdown tables (`R$ 1234.56`), and the pt-BR screen style
//! with thousands separators and a decimal comma (`R$ 1.234,56`).

use rust_decimal::Decimal;

use crate::money::{round2, MONEY_SCALE};

/// Format configuration for displaying decimal values
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Display precision override (defaults to the money scale)
    pub precision: Option<u32>,

    /// Use thousands separators
    pub thousands_sep: bool,

    /// Use decimal comma instead of decimal point
    pub decimal_comma: bool,
}

impl FormatConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Default::default()
    }

    /// Override the number of decimal places
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Enable or disable thousands separators
    pub fn with_thousands_sep(mut self, sep: bool) -> Self {
        self.thousands_sep = sep;
        self
    }

    /// Switch the decimal separator to a comma
    pub fn with_decimal_comma(mut self, comma: bool) -> Self {
        self.decimal_comma = comma;
        self
    }

    /// pt-BR screen preset: thousands dot, decimal comma
    pub fn pt_br() -> Self {
        Self::new().with_thousands_sep(true).with_decimal_comma(true)
    }
}

/// Format a value with a fixed number of decimal places and a decimal point.
///
/// The value is rounded half away from zero before rendering, so
/// `format_plain(2.5, 2)` yields `"2.50"`.
pub fn format_plain(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(
        precision,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.*}", precision as usize, rounded)
}

/// Format a value according to the given configuration.
pub fn format_decimal(value: Decimal, config: &FormatConfig) -> String {
    let precision = config.precision.unwrap_or(MONEY_SCALE);
    let plain = format_plain(value, precision);

    let (negative, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, plain.as_str()),
    };

    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (unsigned, None),
    };

    let formatted_integer = format_integer_with_separators(integer_part, config);

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&formatted_integer);
    if let Some(decimal) = decimal_part {
        result.push(if config.decimal_comma { ',' } else { '.' });
        result.push_str(decimal);
    }
    result
}

/// Format a monetary value in the report style: `R$ ` prefix, two decimal
/// places, decimal point.
pub fn format_currency(value: Decimal) -> String {
    format!("R$ {}", format_plain(round2(value), MONEY_SCALE))
}

/// Format a monetary value in the pt-BR screen style: `R$ 1.234,56`.
pub fn format_currency_br(value: Decimal) -> String {
    format!("R$ {}", format_decimal(value, &FormatConfig::pt_br()))
}

/// Insert thousands separators into the integer digits
fn format_integer_with_separators(digits: &str, config: &FormatConfig) -> String {
    if !config.thousands_sep || digits.len() <= 3 {
        return digits.to_string();
    }

    let separator = if config.decimal_comma { '.' } else { ',' };

    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        result.push(ch);
        let remaining = chars.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push(separator);
        }
    }

    result
}
