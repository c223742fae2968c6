#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # onde
//!
//! A library for resolving symbolic path aliases from a YAML directory tree.
//!
//! An alias file describes a directory hierarchy as nested `[segment,
//! children]` pairs, labeling some nodes with aliases. The tree is expanded
//! into a flat alias→path mapping, and each lookup formats the raw path
//! with caller-supplied variables and presentation options. The library
//! only produces strings; it never touches the filesystem objects the
//! paths point at.
//!
//! ## Core Types
//!
//! - [`Registry`]: binds an alias file and serves cached lookups
//! - [`AliasMap`] and [`expand`]: tree expansion into the flat mapping
//! - [`format_path`], [`FormatOptions`], [`Variables`]: path formatting
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use onde::{expand, format_path, FormatOptions, Variables};
//!
//! let document = serde_yaml::from_str(
//!     "-
//!   - drafts/
//!   -
//!     -
//!       - report: <name>.txt",
//! ).unwrap();
//!
//! let mapping = expand(&document).unwrap();
//! assert_eq!(mapping["report"], "drafts/<name>.txt");
//!
//! let mut variables = Variables::new();
//! variables.insert("name".to_string(), "q3 summary".to_string());
//! let path = format_path(&mapping["report"], &variables, &FormatOptions::default()).unwrap();
//! assert_eq!(path, "drafts/q3\\ summary.txt");
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod registry;
pub mod tree;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use format::{format_path, FormatOptions, Variables};
pub use logging::{init_logger, LogLevel, Logger};
pub use registry::{Registry, DEFAULT_SOURCE};
pub use tree::{expand, AliasMap, Node, NodeData};
