use std::fmt;

use tracing::{debug, instrument};

use crate::tree::TreeItem;

/// Connector in front of every child but the last.
pub const BRANCH: &str = "├── ";
/// Connector in front of the last child.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix segment under an ancestor that has later siblings.
pub const VERTICAL: &str = "│   ";
/// Prefix segment under an ancestor that was the last child.
pub const SPACE: &str = "    ";

/// Renders `root` as text, one line per node, each ending with `\n`.
///
/// # Example
/// ```
/// use outline_tree_core::{render::render_tree, tree::TreeItem};
///
/// let root = TreeItem::new("root", vec![
///   TreeItem::new("a", vec![TreeItem::leaf("a1")]),
///   TreeItem::leaf("b"),
/// ]);
///
/// assert_eq!(render_tree(&root), "root\n├── a\n│   └── a1\n└── b\n");
/// ```
#[instrument(level = "trace", skip_all)]
pub fn render_tree(root: &TreeItem) -> String {
  let rendered = root.to_string();

  debug!(lines = root.node_count(), bytes = rendered.len(), "rendered outline tree");
  rendered
}

/// Writes `root` as text into `writer`.
///
/// The root line is written bare. Every descendant is written depth-first, after the
/// continuation prefix of its ancestors and its own connector.
pub fn write_tree<W: fmt::Write>(root: &TreeItem, writer: &mut W) -> fmt::Result {
  writeln!(writer, "{}", root.content)?;

  let mut prefix = String::new();
  write_children(&root.children, &mut prefix, writer)
}

fn write_children<W: fmt::Write>(children: &[TreeItem], prefix: &mut String, writer: &mut W) -> fmt::Result {
  for (index, child) in children.iter().enumerate() {
    let is_last = index + 1 == children.len();

    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    writeln!(writer, "{prefix}{connector}{}", child.content)?;

    let prefix_len = prefix.len();
    prefix.push_str(if is_last { SPACE } else { VERTICAL });
    write_children(&child.children, prefix, writer)?;
    prefix.truncate(prefix_len);
  }

  Ok(())
}

impl fmt::Display for TreeItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_tree(self, f)
  }
}
