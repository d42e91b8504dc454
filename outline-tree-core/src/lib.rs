#![warn(missing_docs)]
//! This crate turns an outline whose depth is marked by a leading run of `#`
//! into the familiar directory-listing tree.
//!
//! Steps are:
//! 1. `parse::parse_lines()` - Normalize the raw text into `Line`s and check their structure.
//! 2. `tree::build_tree()` - Group the lines into a rooted `TreeItem`.
//! 3. `render::render_tree()` - Draw the tree with `├──`, `└──` and `│` connectors.
//!
//! `transform()` runs all of them.
//!
//! # Example:
//! ```
//! use outline_tree_core::{transform, parse::ParseConfig};
//!
//! let rendered = transform("root\n# a\n## a1\n# b", &ParseConfig::DEFAULT).unwrap();
//!
//! assert_eq!(rendered.as_deref(), Some("root\n├── a\n│   └── a1\n└── b\n"));
//! ```

use tracing::debug;

/// Normalizer and structural checks of the outline lines.
pub mod parse;
/// Rendering of a `TreeItem` as text.
pub mod render;
/// The tree model and its construction from validated lines.
pub mod tree;

use parse::{ParseConfig, ParseError};

/// Converts a whole outline into its rendered tree.
///
/// Returns `Ok(None)` when the input holds no non-blank line.
/// Validation finishes before any tree node is created, so a malformed outline never yields partial output.
pub fn transform(input: &str, config: &ParseConfig) -> Result<Option<String>, ParseError> {
  let lines = parse::parse_lines(input, config)?;

  let Some(root) = tree::build_tree(&lines) else {
    debug!("outline is empty, nothing to render");
    return Ok(None);
  };

  Ok(Some(render::render_tree(&root)))
}
