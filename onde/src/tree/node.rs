//! Parsing of individual alias-tree nodes.
//!
//! A node arrives from the YAML document as a `[nodeData, childList]` pair.
//! `nodeData` is either a bare path segment or a single-key `{alias: segment}`
//! mapping; `childList` is an optional sequence of further pairs. Anything
//! else is rejected with [`Error::MalformedNode`].

use serde_yaml::Value;

use crate::error::{Error, Result};

/// The labeled-or-bare payload of one tree node.
///
/// This is the explicit, fallible reading of the loosely-typed node data:
/// a bare string contributes a path segment only, while a single-key mapping
/// additionally binds an alias to the node's resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// An unlabeled path segment, e.g. `"test_directory/"`.
    Segment(String),
    /// A path segment labeled with an alias, e.g. `{notes: "notes.txt"}`.
    Aliased {
        /// The alias bound to this node.
        alias: String,
        /// The path segment this node contributes.
        segment: String,
    },
}

impl NodeData {
    /// Read node data out of a generic YAML value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedNode`] if the value is neither a string nor
    /// a single-key mapping of string to string.
    pub fn parse(value: &Value) -> Result<Self> {
        match value {
            Value::String(segment) => Ok(Self::Segment(segment.clone())),
            Value::Mapping(mapping) => {
                let mut entries = mapping.iter();
                match (entries.next(), entries.next()) {
                    (Some((Value::String(alias), Value::String(segment))), None) => {
                        Ok(Self::Aliased {
                            alias: alias.clone(),
                            segment: segment.clone(),
                        })
                    }
                    (Some(_), None) => Err(Error::MalformedNode {
                        detail: format!(
                            "alias and segment must both be strings in {}",
                            render(value)
                        ),
                    }),
                    _ => Err(Error::MalformedNode {
                        detail: format!(
                            "alias mapping must have exactly one key, found {}",
                            render(value)
                        ),
                    }),
                }
            }
            other => Err(Error::MalformedNode {
                detail: format!(
                    "node data must be a string or a single-key mapping, found {}",
                    render(other)
                ),
            }),
        }
    }

    /// The alias carried by this node, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Segment(_) => None,
            Self::Aliased { alias, .. } => Some(alias),
        }
    }

    /// The path segment this node contributes.
    #[must_use]
    pub fn segment(&self) -> &str {
        match self {
            Self::Segment(segment) | Self::Aliased { segment, .. } => segment,
        }
    }
}

/// One parsed node of the alias tree.
///
/// The node's path is already joined with its parent's path at parse time,
/// so the tree walk in [`crate::tree::expand`] only has to record aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    alias: Option<String>,
    path: String,
    children: Vec<Node>,
}

impl Node {
    /// Parse a `[nodeData, childList]` pair into a node.
    ///
    /// `parent_path` is the fully joined path of the enclosing node, or
    /// `None` for a root node. Child pairs are parsed recursively with this
    /// node's joined path passed down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedNode`] if the pair is not a sequence of one
    /// or two elements, if the node data has an unexpected shape, or if the
    /// child list is not a sequence.
    pub fn parse(pair: &Value, parent_path: Option<&str>) -> Result<Self> {
        let items = pair.as_sequence().ok_or_else(|| Error::MalformedNode {
            detail: format!("expected a [segment, children] pair, found {}", render(pair)),
        })?;

        let (data, child_list) = match items.as_slice() {
            [data] => (data, None),
            [data, children] => (data, Some(children)),
            _ => {
                return Err(Error::MalformedNode {
                    detail: format!(
                        "a node pair holds one or two elements, found {} in {}",
                        items.len(),
                        render(pair)
                    ),
                })
            }
        };

        let data = NodeData::parse(data)?;
        let path = match parent_path {
            None => data.segment().to_owned(),
            Some(parent) => join_segments(parent, data.segment()),
        };

        let children = match child_list {
            None => Vec::new(),
            Some(list) => {
                let pairs = list.as_sequence().ok_or_else(|| Error::MalformedNode {
                    detail: format!("child list must be a sequence, found {}", render(list)),
                })?;
                pairs
                    .iter()
                    .map(|child| Self::parse(child, Some(&path)))
                    .collect::<Result<Vec<_>>>()?
            }
        };

        Ok(Self {
            alias: data.alias().map(str::to_owned),
            path,
            children,
        })
    }

    /// The alias bound to this node, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The fully joined path from the root down to this node.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The parsed child nodes, in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Join a parent path and a child segment with exactly one separator.
///
/// Trailing separators on the parent and leading separators on the segment
/// are collapsed, so joining never produces consecutive separators. A
/// trailing separator carried by the segment itself is preserved.
///
/// # Examples
///
/// ```
/// use onde::tree::join_segments;
///
/// assert_eq!(join_segments("test_directory/", "bar.txt"), "test_directory/bar.txt");
/// assert_eq!(join_segments("a", "/b"), "a/b");
/// assert_eq!(join_segments("a", "b/"), "a/b/");
/// ```
#[must_use]
pub fn join_segments(parent: &str, segment: &str) -> String {
    let base = parent.trim_end_matches('/');
    let rest = segment.trim_start_matches('/');
    format!("{base}/{rest}")
}

/// Render a YAML value into a short single-line snippet for error messages.
pub(crate) fn render(value: &Value) -> String {
    const LIMIT: usize = 60;

    let mut rendered = serde_yaml::to_string(value)
        .unwrap_or_else(|_| "<unrenderable>".to_string())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if rendered.len() > LIMIT {
        let cut = (0..=LIMIT)
            .rev()
            .find(|&i| rendered.is_char_boundary(i))
            .unwrap_or(0);
        rendered.truncate(cut);
        rendered.push_str("...");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn test_parse_bare_segment() {
        let data = NodeData::parse(&yaml("test_directory/")).unwrap();
        assert_eq!(data, NodeData::Segment("test_directory/".to_string()));
        assert_eq!(data.alias(), None);
        assert_eq!(data.segment(), "test_directory/");
    }

    #[test]
    fn test_parse_aliased_segment() {
        let data = NodeData::parse(&yaml("notes: notes.txt")).unwrap();
        assert_eq!(data.alias(), Some("notes"));
        assert_eq!(data.segment(), "notes.txt");
    }

    #[test]
    fn test_parse_multi_key_mapping_is_malformed() {
        let result = NodeData::parse(&yaml("{a: x, b: y}"));
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_parse_non_string_segment_is_malformed() {
        let result = NodeData::parse(&yaml("notes: 42"));
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
        let result = NodeData::parse(&yaml("42"));
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_parse_null_segment_is_malformed() {
        // `- notes:` with no value parses the value as null, not "".
        let result = NodeData::parse(&yaml("notes:"));
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_node_without_parent_keeps_segment() {
        let node = Node::parse(&yaml("[{notes: notes.txt}]"), None).unwrap();
        assert_eq!(node.alias(), Some("notes"));
        assert_eq!(node.path(), "notes.txt");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_node_joins_parent_path() {
        let node = Node::parse(&yaml("[{notes: notes.txt}]"), Some("projects")).unwrap();
        assert_eq!(node.path(), "projects/notes.txt");
    }

    #[test]
    fn test_node_children_inherit_joined_path() {
        let node = Node::parse(&yaml("[docs/, [[{readme: readme.md}]]]"), None).unwrap();
        assert_eq!(node.alias(), None);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].path(), "docs/readme.md");
    }

    #[test]
    fn test_bare_mapping_is_not_a_pair() {
        let result = Node::parse(&yaml("{notes: notes.txt}"), None);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_unwrapped_child_is_malformed() {
        // A child node must itself be a [segment, children] pair.
        let result = Node::parse(&yaml("[docs/, [{readme: readme.md}]]"), None);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_sibling_mapping_in_pair_is_malformed() {
        let result = Node::parse(&yaml("[{a: x}, {b: y}]"), None);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_overlong_pair_is_malformed() {
        let result = Node::parse(&yaml("[a, [], extra]"), None);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_empty_pair_is_malformed() {
        let result = Node::parse(&yaml("[]"), None);
        assert!(matches!(result, Err(Error::MalformedNode { .. })));
    }

    #[test]
    fn test_join_segments_single_separator() {
        assert_eq!(join_segments("a", "b"), "a/b");
        assert_eq!(join_segments("a/", "b"), "a/b");
        assert_eq!(join_segments("a", "/b"), "a/b");
        assert_eq!(join_segments("a/", "/b"), "a/b");
    }

    #[test]
    fn test_join_segments_preserves_leaf_trailing_separator() {
        assert_eq!(join_segments("a", "b/"), "a/b/");
    }

    #[test]
    fn test_join_segments_from_root() {
        assert_eq!(join_segments("/", "b"), "/b");
    }

    #[test]
    fn test_render_truncates() {
        let value = yaml(&format!("'{}'", "x".repeat(100)));
        let rendered = render(&value);
        assert!(rendered.len() <= 63);
        assert!(rendered.ends_with("..."));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9_. ]{1,12}"
        }

        proptest! {
            /// Joining never produces consecutive separators.
            #[test]
            fn join_never_doubles_separator(
                parent in segment_strategy(),
                trailing in prop::bool::ANY,
                leading in prop::bool::ANY,
                segment in segment_strategy(),
            ) {
                let parent = if trailing { format!("{parent}/") } else { parent };
                let segment = if leading { format!("/{segment}") } else { segment };
                let joined = join_segments(&parent, &segment);
                prop_assert!(!joined.contains("//"));
            }

            /// Joining clean segments is plain concatenation.
            #[test]
            fn join_clean_segments_concatenates(
                parent in segment_strategy(),
                segment in segment_strategy(),
            ) {
                prop_assert_eq!(
                    join_segments(&parent, &segment),
                    format!("{parent}/{segment}")
                );
            }
        }
    }
}
