//! Command-line interface for Cotejo
//!
//! Entry point of the `cotejo` binary: searches the mock procurement
//! catalog and builds comparative price reports from saved line items.

use anyhow::Result;
use clap::Parser;
use std::process;

mod cli;
mod dispatch;
mod session;

use cli::Cli;
use dispatch::Dispatcher;
use session::Session;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Create session with configuration
    let session = match Session::new(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error initializing session: {}", e);
            process::exit(1);
        }
    };

    // Create dispatcher and execute command
    let mut dispatcher = Dispatcher::new(session);

    match dispatcher.execute(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);

            // Show error chain if in verbose mode
            if cli.verbose {
                for cause in e.chain().skip(1) {
                    eprintln!("Caused by: {}", cause);
                }
            }

            process::exit(1);
        }
    }
}
