//! Paths command implementation.
//!
//! This module implements the `paths` command, which dumps the full
//! alias-to-raw-path mapping without applying any formatting.

use clap::Args;
use onde::Logger;

use crate::commands::aliases::OutputFormat;
use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};

/// Show the full alias-to-path mapping.
#[derive(Args)]
pub struct PathsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let registry = open_registry(global)?;
        logger.info(&format!("reading mapping from {}", registry.source().display()));

        let mapping = registry.mapping()?;
        match self.format {
            OutputFormat::Table => {
                for (alias, path) in mapping.iter() {
                    println!("{alias}\t{path}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(mapping.as_ref())?);
            }
        }
        Ok(())
    }
}
