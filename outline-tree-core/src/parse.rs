mod errors;

use regex::Regex;
use tracing::{debug, instrument, trace};

pub use errors::{IndentationJumpError, InvalidMarkerError, MissingRootError, MultipleRootsError, ParseError};

/// Stores settings used while reading an outline.
///
/// # Example
///
/// ```rust
/// use outline_tree_core::parse::ParseConfig;
///
/// let config = ParseConfig { marker: '*' };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
  /// Character whose leading run gives the depth of a line.
  pub marker: char,
}

impl ParseConfig {
  /// Default setup, with `#` as marker.
  pub const DEFAULT: ParseConfig = ParseConfig { marker: '#' };

  /// Builds `^\s*(<marker>*)\s*(.*)$` for this config's marker.
  ///
  /// A whitespace marker would be swallowed by the surrounding `\s*`, so it is refused.
  pub fn line_pattern(&self) -> Result<Regex, ParseError> {
    if self.marker.is_whitespace() {
      return Err(invalid_marker(self.marker, "whitespace is not allowed".to_owned()));
    }

    let marker = regex::escape(self.marker.encode_utf8(&mut [0; 4]));
    Regex::new(&format!(r"^\s*((?:{marker})*)\s*(.*)$")).map_err(|err| invalid_marker(self.marker, err.to_string()))
  }
}

impl Default for ParseConfig {
  fn default() -> Self {
    Self::DEFAULT
  }
}

fn invalid_marker(marker: char, reason: String) -> ParseError {
  ParseError::InvalidMarker(Box::new(InvalidMarkerError { marker, reason }))
}

/// A non-blank outline line with its marker run stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
  /// Text after the marker run, trimmed. Never empty.
  pub content: String,
  /// Number of marker characters in front of the content.
  pub indentation: usize,
  /// 1-based position in the raw input, kept for diagnostics.
  pub line_number: usize,
}

/// Splits `input` into `Line`s, dropping every line with nothing after its markers.
///
/// A leading byte order mark is ignored.
///
/// No structural check happens here; see `validate_lines()`.
///
/// # Example
/// ```
/// use outline_tree_core::parse::{normalize_lines, Line, ParseConfig};
///
/// let lines = normalize_lines("root\n\n  ## deep  ", &ParseConfig::DEFAULT).unwrap();
///
/// assert_eq!(lines, vec![
///   Line { content: "root".to_owned(), indentation: 0, line_number: 1 },
///   Line { content: "deep".to_owned(), indentation: 2, line_number: 3 },
/// ]);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn normalize_lines(input: &str, config: &ParseConfig) -> Result<Vec<Line>, ParseError> {
  let pattern = config.line_pattern()?;
  let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);

  let lines: Vec<Line> = input
    .split('\n')
    .enumerate()
    .filter_map(|(index, raw)| {
      let captures = pattern.captures(raw)?;
      let content = captures.get(2)?.as_str().trim();
      if content.is_empty() {
        return None;
      }

      let line = Line {
        content: content.to_owned(),
        indentation: captures.get(1).map_or(0, |m| m.as_str().chars().count()),
        line_number: index + 1,
      };
      trace!(line_number = line.line_number, indentation = line.indentation, content = %line.content);
      Some(line)
    })
    .collect();

  debug!(retained = lines.len(), "normalized outline");
  Ok(lines)
}

/// Checks that `lines` describe exactly one rooted tree.
///
/// Checks run in this order, and the first failing one is reported:
/// 1. At most one line is at depth 0.
/// 2. The first line is at depth 0.
/// 3. No line is more than one level deeper than the line before it.
///
/// An empty slice is valid.
#[instrument(level = "trace", skip_all)]
pub fn validate_lines(lines: &[Line]) -> Result<(), ParseError> {
  let Some(first) = lines.first() else {
    return Ok(());
  };

  let roots: Vec<usize> = lines.iter().filter(|line| line.indentation == 0).map(|line| line.line_number).collect();

  if roots.len() > 1 {
    debug!(?roots, "rejecting outline with several roots");
    return Err(ParseError::MultipleRoots(Box::new(MultipleRootsError { line_numbers: roots })));
  }

  if first.indentation != 0 {
    debug!(indentation = first.indentation, "rejecting outline without root");
    return Err(ParseError::MissingRoot(Box::new(MissingRootError {
      indentation: first.indentation,
      line_number: first.line_number,
    })));
  }

  for pair in lines.windows(2) {
    let (previous, current) = (&pair[0], &pair[1]);
    if current.indentation > previous.indentation + 1 {
      debug!(
        previous = previous.indentation,
        current = current.indentation,
        line_number = current.line_number,
        "rejecting indentation jump"
      );
      return Err(ParseError::IndentationJump(Box::new(IndentationJumpError {
        previous: previous.indentation,
        current: current.indentation,
        line_number: current.line_number,
      })));
    }
  }

  Ok(())
}

/// Normalizes `input` and validates the result.
///
/// Blank lines are dropped before validation, so they never split or cause an indentation jump.
pub fn parse_lines(input: &str, config: &ParseConfig) -> Result<Vec<Line>, ParseError> {
  let lines = normalize_lines(input, config)?;
  validate_lines(&lines)?;

  Ok(lines)
}
