use std::process;

use clap::Parser;
use cli::{Cli, run};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod exitcode;

fn main() {
  let cli = Cli::parse();

  setup_logging(cli.debug);

  let status = match run(&cli) {
    Ok(()) => exitcode::OK,
    Err(err) => {
      tracing::debug!(?err, "run failed");
      eprintln!("Error: {err}");
      err.exit_code()
    }
  };

  process::exit(status);
}

/// Logs to stderr. `RUST_LOG`, when set, wins over the `-d` count.
fn setup_logging(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    2 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };

  let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

  let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true).with_thread_names(false);

  tracing_subscriber::registry().with(fmt_layer).with(filter).init();

  tracing::debug!(%level, "logging initialized");
}
