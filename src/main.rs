mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rlelife::*;
use tracing_subscriber::EnvFilter;
use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = EnvFilter::builder()
    .with_default_directive(cli.log_level().into())
    .from_env_lossy();
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  let univ = run_file(&cli.pattern, cli.iterations)
    .with_context(|| format!("failed to play {}", cli.pattern.display()))?;

  if let Some(path) = &cli.image {
    export::save_image(univ.grid(), path)?;
  }

  let output = if cli.header {
    rle::write(&univ)
  } else {
    rle::encode(univ.grid())
  };

  println!("{}", output.trim_end());
  Ok(())
}
