//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve an alias to a formatted path
//! - `aliases`: List the known aliases
//! - `paths`: Show the full alias-to-path mapping

pub mod aliases;
pub mod paths;
pub mod resolve;

pub use aliases::AliasesCommand;
pub use paths::PathsCommand;
pub use resolve::ResolveCommand;
