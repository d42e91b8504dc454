use tracing::{debug, instrument};

use crate::parse::Line;

/// A node of the outline tree.
///
/// Each item owns its children; sibling order is document order.
///
/// # Example
/// ```
/// use outline_tree_core::tree::TreeItem;
///
/// let root = TreeItem::new("root", vec![TreeItem::leaf("a"), TreeItem::leaf("b")]);
///
/// assert_eq!(root.to_string(), "root\n├── a\n└── b\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
  /// Text shown for this node.
  pub content: String,
  /// Direct children, in order.
  pub children: Vec<TreeItem>,
}

impl TreeItem {
  /// Creates an item with the given children.
  pub fn new(content: impl Into<String>, children: Vec<TreeItem>) -> Self {
    TreeItem {
      content: content.into(),
      children,
    }
  }

  /// Creates an item without children.
  pub fn leaf(content: impl Into<String>) -> Self {
    Self::new(content, vec![])
  }

  /// Counts this item and all of its descendants.
  pub fn node_count(&self) -> usize {
    1 + self.children.iter().map(TreeItem::node_count).sum::<usize>()
  }
}

/// Builds the tree of validated `lines`, the first line being the root.
///
/// `lines` must have passed `parse::validate_lines()`. Returns `None` if `lines` is empty.
#[instrument(level = "trace", skip_all)]
pub fn build_tree(lines: &[Line]) -> Option<TreeItem> {
  let (head, rest) = lines.split_first()?;

  let root = TreeItem::new(head.content.clone(), build_children(rest, head.indentation));
  debug!(root = %root.content, nodes = root.node_count(), "built outline tree");

  Some(root)
}

/// Groups `lines` into the children of an item at depth `parent_indentation`.
///
/// Only lines exactly one level deeper start a child. Each child takes every following line deeper than
/// itself as its own subtree, and the scan continues after them.
pub fn build_children(lines: &[Line], parent_indentation: usize) -> Vec<TreeItem> {
  let mut children = Vec::new();
  let mut index = 0;

  while index < lines.len() {
    let item = &lines[index];
    if item.indentation != parent_indentation + 1 {
      index += 1;
      continue;
    }

    // Subtree of `item` ends at the first line not deeper than it.
    let end = lines[index + 1..]
      .iter()
      .position(|line| line.indentation <= item.indentation)
      .map_or(lines.len(), |offset| index + 1 + offset);

    children.push(TreeItem::new(
      item.content.clone(),
      build_children(&lines[index + 1..end], item.indentation),
    ));

    index = end;
  }

  children
}
