//! Main entry point for the onde CLI.
//!
//! This is the command-line interface for the onde path alias resolver.
//! It provides commands for querying an alias file:
//! - `resolve`: Resolve an alias to a formatted path
//! - `aliases`: List the known aliases
//! - `paths`: Show the full alias-to-path mapping

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = onde::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions { file: cli.file };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global, &logger),
        cli::Command::Aliases(cmd) => cmd.execute(&global, &logger),
        cli::Command::Paths(cmd) => cmd.execute(&global, &logger),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
