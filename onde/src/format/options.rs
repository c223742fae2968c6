//! Formatting options for resolved paths.

use serde::{Deserialize, Serialize};

/// Presentation options applied when formatting a raw path.
///
/// Hosts can embed an options block in their own configuration; unset fields
/// fall back to the defaults.
///
/// # Examples
///
/// ```
/// use onde::FormatOptions;
///
/// let options = FormatOptions {
///     terminal_slash: true,
///     ..Default::default()
/// };
/// assert!(options.escape_spaces);
/// assert!(options.expand_home_dir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Prefix every literal space with a backslash.
    pub escape_spaces: bool,

    /// Ensure the formatted path ends with exactly one trailing separator.
    pub terminal_slash: bool,

    /// Replace a single leading `~` with the user's home directory.
    pub expand_home_dir: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            escape_spaces: true,
            terminal_slash: false,
            expand_home_dir: true,
        }
    }
}
