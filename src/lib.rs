//! Conway's Game of Life on patterns in RLE format.
//!
//! A pattern is decoded into a finite [`Grid`], advanced generation by
//! generation (pad, evolve, crop) and encoded back to RLE.
//!
//! ```
//! let next = rlelife::play("x = 3, y = 3\nbob$2bo$3o!", Some(2)).unwrap();
//! assert_eq!(next, "2bo$obo$b2o!");
//! ```

pub mod error;
pub mod export;
pub mod grid;
pub mod rle;
pub mod rule;
pub mod universe;

pub use crate::error::{ArgumentError, Error, FormatError, Result};
pub use crate::grid::{crop, pad, Cell, Grid};
pub use crate::universe::{evolve_once, Universe};

use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a pattern file and splits it into lines.
pub fn read_pattern_text(path: impl AsRef<Path>) -> Result<Vec<String>> {
  let path = path.as_ref();
  let text = fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_owned(),
    source,
  })?;
  Ok(text.lines().map(str::to_owned).collect())
}

/// Decodes the pattern in `src` and advances it by `iterations` generations.
pub fn run(src: impl AsRef<str>, iterations: Option<i64>) -> Result<Universe> {
  let iterations = check_iterations(iterations)?;
  let mut univ = Universe::read(src)?;
  univ.simulate(iterations);
  info!(
    generations = univ.generation(),
    population = univ.population(),
    "simulation finished"
  );
  Ok(univ)
}

/// Same as [`run`] with the pattern read from `path`.
pub fn run_file(path: impl AsRef<Path>, iterations: Option<i64>) -> Result<Universe> {
  check_iterations(iterations)?;
  let lines = read_pattern_text(path)?;
  run(lines.join("\n"), iterations)
}

/// Runs `iterations` generations of the pattern in `src` and returns the
/// final state in RLE format, without header.
pub fn play(src: impl AsRef<str>, iterations: Option<i64>) -> Result<String> {
  run(src, iterations).map(|univ| rle::encode(univ.grid()))
}

/// Same as [`play`] with the pattern read from `path`.
pub fn play_file(path: impl AsRef<Path>, iterations: Option<i64>) -> Result<String> {
  run_file(path, iterations).map(|univ| rle::encode(univ.grid()))
}

fn check_iterations(iterations: Option<i64>) -> Result<u64, ArgumentError> {
  match iterations {
    None => Err(ArgumentError::MissingIterations),
    Some(n) if n < 0 => Err(ArgumentError::NegativeIterations(n)),
    Some(n) => Ok(n as u64),
  }
}
