use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors that can occur while reading an outline.
///
/// Every variant rejects the whole input; nothing is rendered for it.
pub enum ParseError {
  /// Error indicating that more than one line sits at depth 0.
  #[error(transparent)]
  MultipleRoots(Box<MultipleRootsError>),
  /// Error indicating that the first line is not at depth 0.
  #[error(transparent)]
  MissingRoot(Box<MissingRootError>),
  /// Error indicating that a line is more than one level deeper than the line before it.
  #[error(transparent)]
  IndentationJump(Box<IndentationJumpError>),
  /// Error indicating that the configured marker cannot be used to mark depth.
  #[error(transparent)]
  InvalidMarker(Box<InvalidMarkerError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
  "There can be only one root element at the beginning (found {} at lines {})",
  .line_numbers.len(),
  join_line_numbers(.line_numbers)
)]
/// Represents an outline with several depth-0 lines.
pub struct MultipleRootsError {
  /// 1-based input line numbers of every depth-0 line.
  pub line_numbers: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The first element should have no indentation (found depth {indentation} at line {line_number})")]
/// Represents an outline whose first line is indented.
pub struct MissingRootError {
  /// Depth of the first retained line.
  pub indentation: usize,
  /// 1-based input line number of that line.
  pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Incorrect indentation at line {line_number}: was {previous} and now is {current}")]
/// Represents a line nested more than one level below its predecessor.
pub struct IndentationJumpError {
  /// Depth of the preceding retained line.
  pub previous: usize,
  /// Depth of the offending line.
  pub current: usize,
  /// 1-based input line number of the offending line.
  pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The marker {marker:?} cannot mark depth: {reason}")]
/// Represents a marker character the line pattern cannot be built from.
pub struct InvalidMarkerError {
  /// The rejected marker.
  pub marker: char,
  /// Why it was rejected.
  pub reason: String,
}

fn join_line_numbers(line_numbers: &[usize]) -> String {
  line_numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}
