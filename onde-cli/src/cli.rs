//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{AliasesCommand, PathsCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving path aliases from a YAML directory tree.
#[derive(Parser)]
#[command(name = "onde")]
#[command(version, about = "Resolve path aliases from a YAML directory tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the alias file location
    #[arg(long, value_name = "PATH", global = true, env = "ONDE_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve an alias to a formatted path
    Resolve(ResolveCommand),

    /// List the known aliases
    Aliases(AliasesCommand),

    /// Show the full alias-to-path mapping
    Paths(PathsCommand),
}
