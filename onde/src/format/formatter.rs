//! Path formatting functions.
//!
//! A raw path coming out of the alias mapping is turned into its final form
//! by an ordered sequence of transformations:
//!
//! 1. Variable substitution (with a scan for leftover placeholders)
//! 2. Space escaping
//! 3. Terminal slash
//! 4. Home-directory expansion
//!
//! The order is fixed: substituted values containing spaces are escaped like
//! any other text, and home expansion looks at the leading character of the
//! *substituted* string.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::format::options::FormatOptions;
use crate::tree::join_segments;

/// Variable values substituted for `<name>` placeholders in a raw path.
///
/// Callers stringify scalar values before insertion.
pub type Variables = BTreeMap<String, String>;

/// Format a raw path with the given variables and options.
///
/// This is the main formatting entry point, composing the individual
/// transformations in their fixed order. Transformations disabled in
/// `options` are skipped, but the scan for unresolved placeholders always
/// runs.
///
/// # Errors
///
/// - [`Error::UnresolvedVariable`] if a `<...>` placeholder survives
///   substitution.
/// - [`Error::MissingHomeDirectory`] if home expansion is enabled, the path
///   starts with `~`, and no home directory can be determined.
///
/// # Examples
///
/// ```
/// use onde::{format_path, FormatOptions, Variables};
///
/// let mut variables = Variables::new();
/// variables.insert("name".to_string(), "report".to_string());
///
/// let formatted = format_path(
///     "drafts/<name>.txt",
///     &variables,
///     &FormatOptions::default(),
/// ).unwrap();
/// assert_eq!(formatted, "drafts/report.txt");
/// ```
pub fn format_path(path: &str, variables: &Variables, options: &FormatOptions) -> Result<String> {
    let mut formatted = substitute(path, variables)?;
    if options.escape_spaces {
        formatted = escape_spaces(&formatted);
    }
    if options.terminal_slash {
        formatted = ensure_terminal_slash(&formatted);
    }
    if options.expand_home_dir {
        formatted = expand_home(&formatted)?;
    }
    Ok(formatted)
}

/// Replace every `<name>` placeholder with its variable value.
///
/// After all supplied variables are substituted, the result is scanned for
/// any remaining placeholder; the scan runs even when `variables` is empty,
/// so a template with no supplied values fails deterministically.
///
/// # Errors
///
/// Returns [`Error::UnresolvedVariable`] naming the leftmost placeholder
/// that has no supplied value.
///
/// # Examples
///
/// ```
/// use onde::format::substitute;
/// use onde::Variables;
///
/// let mut variables = Variables::new();
/// variables.insert("file_type".to_string(), "txt".to_string());
/// assert_eq!(substitute("a.<file_type>", &variables).unwrap(), "a.txt");
///
/// let err = substitute("a.<file_type>", &Variables::new()).unwrap_err();
/// assert_eq!(err.to_string(), "unresolved variable <file_type>");
/// ```
pub fn substitute(path: &str, variables: &Variables) -> Result<String> {
    let mut substituted = path.to_string();
    for (name, value) in variables {
        substituted = substituted.replace(&format!("<{name}>"), value);
    }

    if let Some(name) = find_placeholder(&substituted) {
        return Err(Error::UnresolvedVariable {
            name: name.to_string(),
        });
    }
    Ok(substituted)
}

/// Find the leftmost `<...>` placeholder, returning its name.
///
/// A `<` with no closing `>` after it is not a placeholder.
fn find_placeholder(path: &str) -> Option<&str> {
    let start = path.find('<')?;
    let rest = &path[start + 1..];
    let end = rest.find('>')?;
    Some(&rest[..end])
}

/// Prefix every literal space with a backslash.
///
/// # Examples
///
/// ```
/// use onde::format::escape_spaces;
///
/// assert_eq!(escape_spaces("/A Folder/a file.txt"), "/A\\ Folder/a\\ file.txt");
/// ```
#[must_use]
pub fn escape_spaces(path: &str) -> String {
    path.replace(' ', "\\ ")
}

/// Append a trailing separator unless the path already ends with one.
#[must_use]
pub fn ensure_terminal_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Replace a single leading `~` with the user's home directory.
///
/// The remainder is joined onto the home directory as a path segment, so
/// `~/Documents` and `~Documents` both land under the home directory. A `~`
/// anywhere past position zero is untouched.
///
/// # Errors
///
/// Returns [`Error::MissingHomeDirectory`] if the path starts with `~` and
/// the home directory cannot be determined (or is not valid UTF-8).
pub fn expand_home(path: &str) -> Result<String> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(path.to_string());
    };

    let home = home::home_dir().ok_or(Error::MissingHomeDirectory)?;
    let home = home.to_str().ok_or(Error::MissingHomeDirectory)?;
    if rest.is_empty() {
        Ok(home.to_string())
    } else {
        Ok(join_segments(home, rest))
    }
}
