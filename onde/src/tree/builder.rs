//! Expansion of the alias tree into a flat mapping.
//!
//! The builder parses every top-level `[segment, children]` pair into a
//! [`Node`], then walks the resulting forest parent-before-children with an
//! explicit work stack, recording one `alias → path` entry per labeled node.

use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::tree::node::{render, Node};

/// Flat mapping from alias to its fully joined raw path.
///
/// Raw paths may still contain `<name>` placeholders; substitution happens
/// at formatting time, not at expansion time.
pub type AliasMap = BTreeMap<String, String>;

/// Expand a parsed YAML document into an [`AliasMap`].
///
/// The document must be a sequence of `[segment, children]` pairs. Nodes
/// without an alias contribute no entry of their own but their joined path
/// remains the base for their descendants.
///
/// # Errors
///
/// - [`Error::MalformedNode`] if the document or any node violates the
///   expected shape.
/// - [`Error::DuplicateAlias`] if the same alias labels more than one node
///   anywhere in the forest. No partial mapping is returned.
///
/// # Examples
///
/// ```
/// use onde::tree::expand;
///
/// let document = serde_yaml::from_str("- - docs/\n  - - - {readme: readme.md}").unwrap();
/// let mapping = expand(&document).unwrap();
/// assert_eq!(mapping["readme"], "docs/readme.md");
/// ```
pub fn expand(document: &Value) -> Result<AliasMap> {
    let pairs = document.as_sequence().ok_or_else(|| Error::MalformedNode {
        detail: format!(
            "top-level document must be a sequence of node pairs, found {}",
            render(document)
        ),
    })?;

    let forest = pairs
        .iter()
        .map(|pair| Node::parse(pair, None))
        .collect::<Result<Vec<_>>>()?;

    let mut mapping = AliasMap::new();
    let mut stack: Vec<&Node> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if let Some(alias) = node.alias() {
            if mapping
                .insert(alias.to_owned(), node.path().to_owned())
                .is_some()
            {
                return Err(Error::DuplicateAlias {
                    alias: alias.to_owned(),
                });
            }
        }
        // Reversed so children are visited in document order.
        stack.extend(node.children().iter().rev());
    }

    log::debug!("expanded {} aliases", mapping.len());
    Ok(mapping)
}
