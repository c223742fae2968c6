//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which looks up an alias
//! and prints the formatted path.

use clap::Args;
use onde::{FormatOptions, Logger, Variables};

use crate::error::CliError;
use crate::utils::{open_registry, parse_variable, GlobalOptions};

/// Resolve an alias to a formatted path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Alias to resolve
    pub alias: String,

    /// Variable substitution in NAME=VALUE form (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub variables: Vec<String>,

    /// Do not escape spaces in the formatted path
    #[arg(long)]
    pub no_escape_spaces: bool,

    /// End the formatted path with a trailing separator
    #[arg(long)]
    pub terminal_slash: bool,

    /// Leave a leading ~ unexpanded
    #[arg(long)]
    pub no_expand_home: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions, logger: &Logger) -> Result<(), CliError> {
        let registry = open_registry(global)?;
        logger.info(&format!("resolving against {}", registry.source().display()));

        let variables = self
            .variables
            .iter()
            .map(|assignment| parse_variable(assignment))
            .collect::<Result<Variables, CliError>>()?;

        let options = FormatOptions {
            escape_spaces: !self.no_escape_spaces,
            terminal_slash: self.terminal_slash,
            expand_home_dir: !self.no_expand_home,
        };

        let path = registry.resolve(&self.alias, &variables, &options)?;
        println!("{path}");
        Ok(())
    }
}
