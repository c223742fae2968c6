//! Aliases command implementation.
//!
//! This module implements the `aliases` command, which lists the aliases
//! known to the active alias file.

use clap::{Args, ValueEnum};
use onde::Logger;

use crate::error::CliError;
use crate::utils::{open_registry, GlobalOptions};

/// List the known aliases.
#[derive(Args)]
pub struct AliasesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for listing commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line (human-readable)
    Table,
    /// JSON format
    Json,
}

impl AliasesCommand {
    /// Execute the aliases command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let registry = open_registry(global)?;
        logger.info(&format!("listing aliases in {}", registry.source().display()));

        let aliases = registry.aliases()?;
        match self.format {
            OutputFormat::Table => {
                for alias in &aliases {
                    println!("{alias}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&aliases)?);
            }
        }
        Ok(())
    }
}
