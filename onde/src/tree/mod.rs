//! Alias-tree parsing and expansion.
//!
//! The alias file holds a forest of `[segment, children]` pairs. Each pair
//! contributes one path segment, optionally labeled with an alias, plus a
//! list of child pairs nested beneath it:
//!
//! ```yaml
//! -
//!   - test_directory/
//!   -
//!     -
//!       - bar: bar.txt
//! ```
//!
//! Expansion joins the segments from the root down and flattens the labeled
//! nodes into a single [`AliasMap`], here `{bar: "test_directory/bar.txt"}`.
//! Duplicate aliases and shape violations abort expansion; no partial
//! mapping is ever produced.

pub mod builder;
pub mod node;

// Re-export key types
pub use builder::{expand, AliasMap};
pub use node::{join_segments, Node, NodeData};
