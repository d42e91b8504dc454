//! Command-line arguments and the stream plumbing around the core transform.

use std::{
  fs,
  io::{self, Read, Write},
  path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueHint};
use outline_tree_core::parse::{ParseConfig, ParseError};
use thiserror::Error;
use tracing::{debug, info};

use crate::exitcode;

/// Renders a `#`-marked outline as a directory-style tree
#[derive(Parser, Debug)]
#[command(name = "outline-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Outline file to read (`-` or absent: stdin)
  #[arg(value_hint = ValueHint::FilePath)]
  pub input: Option<PathBuf>,

  /// Write the rendered tree to FILE instead of stdout
  #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
  pub output: Option<PathBuf>,

  /// Character whose leading run marks the depth of a line
  #[arg(short, long, default_value_t = '#', value_parser = parse_marker)]
  pub marker: char,

  /// Increase log verbosity (-d info, -dd debug, -ddd trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub debug: u8,
}

impl Cli {
  /// Options for the outline parser.
  pub fn parse_config(&self) -> ParseConfig {
    ParseConfig { marker: self.marker }
  }

  /// The file to read, or `None` for stdin.
  fn input_path(&self) -> Option<&Path> {
    self.input.as_deref().filter(|path| *path != Path::new("-"))
  }
}

fn parse_marker(value: &str) -> Result<char, String> {
  let mut chars = value.chars();
  match (chars.next(), chars.next()) {
    (Some(marker), None) if !marker.is_whitespace() => Ok(marker),
    (Some(_), None) => Err("the marker cannot be whitespace".to_owned()),
    _ => Err(format!("expected a single character, got {value:?}")),
  }
}

/// Failures of a run, each mapped to its exit status.
#[derive(Error, Debug)]
pub enum CliError {
  /// The outline is malformed.
  #[error(transparent)]
  Parse(#[from] ParseError),

  /// The input file is missing or unreadable.
  #[error("{0:#}")]
  NoInput(anyhow::Error),

  /// Reading or writing a stream failed, including non-UTF-8 input.
  #[error("{0:#}")]
  Io(anyhow::Error),
}

impl CliError {
  /// Status the process exits with for this failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      CliError::Parse(_) => exitcode::DATAERR,
      CliError::NoInput(_) => exitcode::NOINPUT,
      CliError::Io(_) => exitcode::IOERR,
    }
  }
}

/// Reads the input, renders it and writes the tree out.
pub fn run(cli: &Cli) -> Result<(), CliError> {
  let input = read_input(cli)?;
  debug!(bytes = input.len(), "read outline");

  let Some(rendered) = outline_tree_core::transform(&input, &cli.parse_config())? else {
    info!("no outline content, nothing written");
    return Ok(());
  };

  write_output(cli, &rendered)
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
  let Some(path) = cli.input_path() else {
    let mut input = String::new();
    io::stdin()
      .lock()
      .read_to_string(&mut input)
      .context("Failed to read outline from stdin")
      .map_err(CliError::Io)?;
    return Ok(input);
  };

  fs::read_to_string(path).with_context(|| format!("Failed to read outline from {}", path.display())).map_err(|err| {
    match err.downcast_ref::<io::Error>().map(io::Error::kind) {
      Some(io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) => CliError::NoInput(err),
      _ => CliError::Io(err),
    }
  })
}

fn write_output(cli: &Cli, rendered: &str) -> Result<(), CliError> {
  match &cli.output {
    Some(path) => {
      fs::write(path, rendered).with_context(|| format!("Failed to write tree to {}", path.display())).map_err(CliError::Io)
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write tree to stdout")
        .map_err(CliError::Io)
    }
  }
}
