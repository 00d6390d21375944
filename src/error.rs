use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::play`] and the file/image helpers.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid arguments: {0}")]
  Argument(#[from] ArgumentError),

  #[error("invalid RLE pattern: {0}")]
  Format(#[from] FormatError),

  #[error("cannot read pattern file {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot save image {}: {source}", .path.display())]
  Image {
    path: PathBuf,
    #[source]
    source: image::ImageError,
  },

  #[error("cannot render an empty pattern to an image")]
  EmptyImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
  #[error("number of game iterations must be provided")]
  MissingIterations,

  #[error("iterations must not be negative, got {0}")]
  NegativeIterations(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
  #[error("no pattern lines found")]
  NoPatternLines,

  #[error("missing `x = .., y = ..` header line")]
  MissingHeader,

  #[error("malformed header line {0:?}")]
  InvalidHeader(String),

  /// Declared width or height is zero.
  #[error("declared bounding box {width}x{height} is empty")]
  EmptyDimension { width: u32, height: u32 },

  #[error("unexpected character {ch:?} at offset {offset}")]
  UnexpectedChar { ch: char, offset: usize },

  #[error("pattern is not terminated by `!`")]
  MissingTerminator,

  #[error("run count {0:?} is out of range")]
  InvalidRunCount(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
