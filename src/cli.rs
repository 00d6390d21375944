use std::path::PathBuf;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

/// Run Conway's Game of Life on an RLE pattern and print the result as RLE.
#[derive(Debug, Parser)]
#[command(name = "rlelife")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
  /// Pattern file in RLE format
  pub pattern: PathBuf,

  /// Number of generations to run
  #[arg(allow_negative_numbers = true)]
  pub iterations: Option<i64>,

  /// Also render the final generation to an image (format from extension)
  #[arg(long, value_name = "PATH")]
  pub image: Option<PathBuf>,

  /// Print a full RLE file with header line instead of the bare pattern
  #[arg(long)]
  pub header: bool,

  /// Increase log verbosity (-v, -vv, -vvv); `RUST_LOG` takes precedence
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8,
}

impl Cli {
  pub fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parse_negative_iterations() {
    let cli = Cli::try_parse_from(["rlelife", "glider.rle", "-1"]).unwrap();
    assert_eq!(cli.iterations, Some(-1));
    assert_eq!(cli.pattern, PathBuf::from("glider.rle"));
  }

  #[test]
  fn iterations_are_optional_to_clap() {
    let cli = Cli::try_parse_from(["rlelife", "glider.rle", "-vv", "--header"]).unwrap();
    assert_eq!(cli.iterations, None);
    assert!(cli.header);
    assert_eq!(cli.log_level(), LevelFilter::DEBUG);
  }
}
