//! Shared helpers for CLI commands.

use std::path::PathBuf;

use onde::Registry;

use crate::error::CliError;

/// Global options shared by all commands.
pub struct GlobalOptions {
    /// Explicit alias file location, if any.
    pub file: Option<PathBuf>,
}

/// Open a registry bound to the requested alias file.
///
/// With no explicit file the registry falls back to the conventional
/// default and the file is only required once the mapping is built.
pub fn open_registry(global: &GlobalOptions) -> Result<Registry, CliError> {
    match &global.file {
        Some(path) => Registry::with_source(path).map_err(CliError::from),
        None => Ok(Registry::new()),
    }
}

/// Parse a `NAME=VALUE` variable assignment.
pub fn parse_variable(assignment: &str) -> Result<(String, String), CliError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidArguments(format!(
            "variable must be NAME=VALUE, got '{assignment}'"
        ))),
    }
}
