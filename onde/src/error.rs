//! Error types for the onde library.
//!
//! This module provides the error hierarchy for alias-file loading, tree
//! expansion, and path formatting, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an onde error.
///
/// # Examples
///
/// ```
/// use onde::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("projects/notes.txt".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the onde library.
///
/// This enum encompasses all failure conditions that can occur while
/// loading an alias file, expanding the directory tree, or formatting a
/// resolved path.
#[derive(Debug, Error)]
pub enum Error {
    /// The alias file could not be read or parsed as YAML.
    #[error("configuration error for {}: {reason}", path.display())]
    Configuration {
        /// Path of the alias file that failed to load.
        path: PathBuf,
        /// The reason the file could not be loaded.
        reason: String,
    },

    /// A node in the alias tree violates the expected shape.
    ///
    /// Every node must be a `[segment, children]` pair where the segment is
    /// either a bare string or a single-key `{alias: segment}` mapping.
    #[error("malformed node: {detail}")]
    MalformedNode {
        /// Description of the offending data.
        detail: String,
    },

    /// The same alias is bound to more than one node in the tree.
    #[error("duplicate alias '{alias}'")]
    DuplicateAlias {
        /// The alias that was defined more than once.
        alias: String,
    },

    /// An alias was looked up that is absent from the mapping.
    #[error("no path found for alias '{alias}'")]
    PathNotFound {
        /// The alias that was looked up.
        alias: String,
    },

    /// Formatting left a `<...>` placeholder unsubstituted.
    #[error("unresolved variable <{name}>")]
    UnresolvedVariable {
        /// Name of the leftmost placeholder with no supplied value.
        name: String,
    },

    /// Home-directory expansion was requested but the invoking user's home
    /// directory could not be determined.
    #[error("cannot determine home directory")]
    MissingHomeDirectory,
}

impl Error {
    /// Check if error indicates an alias absent from the mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use onde::Error;
    ///
    /// let err = Error::PathNotFound { alias: "scratch".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error came from loading the alias file itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use onde::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Configuration {
    ///     path: PathBuf::from(".onde.yml"),
    ///     reason: "no such file".to_string(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
