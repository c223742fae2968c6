//! Formatting of raw alias paths into final strings.
//!
//! A raw path is a template: it may carry `<name>` placeholders and a
//! leading `~`, and it is presented according to [`FormatOptions`]. The
//! transformations run in a fixed order — substitution, space escaping,
//! terminal slash, home expansion — so that substituted values are escaped
//! like any other text and home expansion sees the substituted string.
//!
//! # Examples
//!
//! ```
//! use onde::{format_path, FormatOptions, Variables};
//!
//! let mut variables = Variables::new();
//! variables.insert("name".to_string(), "a b".to_string());
//!
//! let formatted = format_path("<name>.txt", &variables, &FormatOptions::default()).unwrap();
//! assert_eq!(formatted, "a\\ b.txt");
//! ```

pub mod formatter;
pub mod options;

// Re-export key types
pub use formatter::{
    ensure_terminal_slash, escape_spaces, expand_home, format_path, substitute, Variables,
};
pub use options::FormatOptions;
