//! Command-line interface definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use cotejo_core::SearchField;

/// Cotejo - comparative price maps for public procurement quotes
#[derive(Parser)]
#[command(name = "cotejo")]
#[command(version, about = "Mapa comparativo de preços para cotações públicas", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Output to specified file
    #[arg(long = "output", short = 'o', global = true)]
    pub output: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// List the configured data sources
    Sources,

    /// Search the product catalog
    Search(SearchArgs),

    /// Build the comparative price report from saved line items
    Report(ReportArgs),
}

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Query text; an empty string lists every listing
    pub query: String,

    /// Field the query is matched against
    #[arg(long = "field", value_enum, default_value = "product")]
    pub field: FieldArg,

    /// Restrict results to these sources (repeatable)
    #[arg(long = "source", short = 's')]
    pub sources: Vec<String>,
}

/// Search field selector exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Match on the product name
    Product,
    /// Match on the source name
    Location,
    /// Match on the supplier name
    Supplier,
}

impl From<FieldArg> for SearchField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Product => SearchField::Product,
            FieldArg::Location => SearchField::Location,
            FieldArg::Supplier => SearchField::Supplier,
        }
    }
}

/// Arguments for the report command
#[derive(Args)]
pub struct ReportArgs {
    /// JSON file with the saved line items
    #[arg(long = "file", short = 'f')]
    pub file: String,

    /// Report title
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Normative decree reference shown in the header and narrative
    #[arg(long = "decree")]
    pub decree: Option<String>,

    /// Free-text description of the quotation
    #[arg(long = "description")]
    pub description: Option<String>,

    /// Skip the technical narrative section
    #[arg(long = "no-narrative")]
    pub no_narrative: bool,

    /// Print the report to stdout instead of writing a file
    #[arg(long = "stdout")]
    pub stdout: bool,
}
