//! Command dispatch and handlers

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;

use cotejo_core::{
    group_items, mock_listings, read_items, render_report, report_file_name, search,
    total_budget, ReportOptions, SourceKind,
};
use cotejo_math::format_currency_br;

use crate::cli::{Cli, Commands, ReportArgs, SearchArgs};
use crate::session::Session;

/// Main command dispatcher
pub struct Dispatcher {
    session: Session,
}

impl Dispatcher {
    /// Create a new dispatcher with the given session
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Execute the command specified in the CLI arguments
    pub fn execute(&mut self, cli: &Cli) -> Result<i32> {
        match &cli.command {
            Some(Commands::Sources) => self.cmd_sources(),
            Some(Commands::Search(args)) => self.cmd_search(args),
            Some(Commands::Report(args)) => self.cmd_report(args),
            None => {
                println!("cotejo {}", env!("CARGO_PKG_VERSION"));
                println!("Use `cotejo --help` para ver os comandos disponíveis.");
                Ok(0)
            }
        }
    }

    /// List the configured data sources
    fn cmd_sources(&self) -> Result<i32> {
        println!("Fontes de dados configuradas:");
        for source in &self.session.sources {
            let kind = match source.kind {
                SourceKind::Public => "Público",
                SourceKind::Paid => "Pago",
            };
            println!("  {} - {} ({})", source.id, source.name, kind);
        }
        Ok(0)
    }

    /// Search the mock catalog and print the matching listings
    fn cmd_search(&self, args: &SearchArgs) -> Result<i32> {
        let listings = mock_listings();
        let results = search(&listings, &args.query, args.field.into(), &args.sources);
        debug!("{} resultados para \"{}\"", results.len(), args.query);

        if results.is_empty() {
            println!("Nenhum resultado para \"{}\".", args.query);
            return Ok(0);
        }

        for listing in &results {
            println!(
                "{:<4} {:<40} {:<28} {:<12} {}",
                listing.id,
                listing.product_name,
                listing.supplier,
                listing.source,
                format_currency_br(listing.price)
            );
        }
        println!("{} resultado(s).", results.len());
        Ok(0)
    }

    /// Aggregate a line-item file and write or print the report
    fn cmd_report(&self, args: &ReportArgs) -> Result<i32> {
        let items = read_items(Path::new(&args.file))
            .with_context(|| format!("cannot load line items from {}", args.file))?;
        let groups = group_items(&items);
        debug!(
            "{} itens agrupados em {} produtos, total {}",
            items.len(),
            groups.len(),
            format_currency_br(total_budget(&groups))
        );
        if self.session.verbose {
            eprintln!("{} itens agrupados em {} produtos", items.len(), groups.len());
        }

        let mut options = ReportOptions::default();
        if let Some(title) = &args.title {
            options.title = title.clone();
        }
        if let Some(decree) = &args.decree {
            options.decree = decree.clone();
        }
        if let Some(description) = &args.description {
            options.description = description.clone();
        }
        options.include_technical_narrative = !args.no_narrative;

        let report = render_report(&groups, &options);

        if args.stdout {
            print!("{}", report);
            return Ok(0);
        }

        let path = match &self.session.output {
            Some(output) => output.clone(),
            None => self.session.initial_cwd.join(report_file_name(Local::now().date_naive())),
        };
        fs::write(&path, report)
            .with_context(|| format!("cannot write report to {}", path.display()))?;
        println!("Relatório gravado em {}", path.display());
        Ok(0)
    }
}
