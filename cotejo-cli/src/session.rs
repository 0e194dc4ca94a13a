//! Session state shared by command handlers

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use cotejo_core::{default_sources, Source};

use crate::cli::Cli;

/// Runtime state derived from the command line
pub struct Session {
    /// Data sources the catalog is configured with
    pub sources: Vec<Source>,

    /// Whether verbose mode is enabled
    pub verbose: bool,

    /// Output file override from the command line
    pub output: Option<PathBuf>,

    /// Current working directory when started
    pub initial_cwd: PathBuf,
}

impl Session {
    /// Build a session from parsed command-line arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let initial_cwd =
            env::current_dir().context("cannot determine the current working directory")?;

        Ok(Self {
            sources: default_sources(),
            verbose: cli.verbose,
            output: cli.output.as_ref().map(PathBuf::from),
            initial_cwd,
        })
    }
}
