//! Property-based tests for outline rendering.
//!
//! Outlines are generated as a root followed by lines whose depth is at least 1 and at most one
//! more than the previous line, which is exactly the set of valid outlines.

use outline_tree_core::{
  parse::{ParseConfig, ParseError},
  transform,
};
use proptest::prelude::*;

/// Depths and contents of the non-root lines of a valid outline.
fn outline_body() -> impl Strategy<Value = Vec<(usize, String)>> {
  prop::collection::vec((0usize..8, "[a-z][a-z0-9_.]{0,7}"), 0..24).prop_map(|raw| {
    let mut previous = 0;
    raw
      .into_iter()
      .map(|(pick, content)| {
        let depth = 1 + pick % (previous + 1);
        previous = depth;
        (depth, content)
      })
      .collect()
  })
}

fn outline_text(body: &[(usize, String)]) -> String {
  let mut text = "root\n".to_owned();
  for (depth, content) in body {
    text.push_str(&"#".repeat(*depth));
    text.push(' ');
    text.push_str(content);
    text.push('\n');
  }
  text
}

/// Whether the line at `index` has no later sibling.
fn is_last_child(depths: &[usize], index: usize) -> bool {
  let depth = depths[index];
  depths[index + 1..].iter().take_while(|d| **d >= depth).all(|d| *d != depth)
}

/// Expected rendering of one line, computed from the flat depth list.
fn expected_line(body: &[(usize, String)], index: usize) -> String {
  let depths: Vec<usize> = body.iter().map(|(d, _)| *d).collect();
  let depth = depths[index];

  let mut line = String::new();
  for ancestor_depth in 1..depth {
    let ancestor = (0..index).rev().find(|i| depths[*i] == ancestor_depth).unwrap();
    line.push_str(if is_last_child(&depths, ancestor) { "    " } else { "│   " });
  }
  line.push_str(if is_last_child(&depths, index) { "└── " } else { "├── " });
  line.push_str(&body[index].1);
  line
}

proptest! {
  #[test]
  fn one_output_line_per_input_line(body in outline_body()) {
    let rendered = transform(&outline_text(&body), &ParseConfig::DEFAULT).unwrap().unwrap();

    prop_assert_eq!(rendered.lines().count(), body.len() + 1);
    prop_assert!(rendered.ends_with('\n'));
  }

  #[test]
  fn root_line_is_bare(body in outline_body()) {
    let rendered = transform(&outline_text(&body), &ParseConfig::DEFAULT).unwrap().unwrap();

    prop_assert_eq!(rendered.lines().next(), Some("root"));
  }

  #[test]
  fn connectors_and_prefixes(body in outline_body()) {
    let rendered = transform(&outline_text(&body), &ParseConfig::DEFAULT).unwrap().unwrap();

    for (index, line) in rendered.lines().skip(1).enumerate() {
      prop_assert_eq!(line, expected_line(&body, index));
    }
  }

  #[test]
  fn blank_lines_do_not_matter(
    body in outline_body(),
    blanks in prop::collection::vec((0usize..32, "[ \t]{0,3}#{0,2}[ \t]{0,2}"), 0..8)
  ) {
    let text = outline_text(&body);
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    for (position, blank) in blanks {
      let position = position % (lines.len() + 1);
      lines.insert(position, blank);
    }
    let padded = lines.join("\n");

    prop_assert_eq!(
      transform(&padded, &ParseConfig::DEFAULT),
      transform(&text, &ParseConfig::DEFAULT)
    );
  }

  #[test]
  fn same_input_same_result(input in "[a-z# \n]{0,64}") {
    let first = transform(&input, &ParseConfig::DEFAULT);
    let second = transform(&input, &ParseConfig::DEFAULT);

    prop_assert_eq!(first.clone(), second);
    if let Err(err) = first {
      prop_assert!(!err.to_string().is_empty());
    }
  }

  #[test]
  fn deep_jump_is_reported(body in outline_body(), extra in 2usize..5) {
    let previous = body.last().map_or(0, |(d, _)| *d);
    let text = format!("{}{} jump\n", outline_text(&body), "#".repeat(previous + extra));

    match transform(&text, &ParseConfig::DEFAULT) {
      Err(ParseError::IndentationJump(err)) => {
        prop_assert_eq!(err.previous, previous);
        prop_assert_eq!(err.current, previous + extra);
        prop_assert_eq!(err.line_number, body.len() + 2);
      }
      other => prop_assert!(false, "expected an indentation jump, got {:?}", other),
    }
  }
}
