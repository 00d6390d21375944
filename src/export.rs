use std::path::Path;
use image::{ImageBuffer, Luma};
use tracing::debug;
use crate::error::{Error, Result};
use crate::grid::*;

const ALIVE_PIXEL: Luma<u8> = Luma([0x00]);
const DEAD_PIXEL: Luma<u8> = Luma([0xff]);

/// Renders the grid one pixel per cell, black on white.
pub fn to_image(grid: &Grid) -> ImageBuffer<Luma<u8>, Vec<u8>> {
  ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
    if grid.get(x as isize, y as isize).is_alive() {
      ALIVE_PIXEL
    } else {
      DEAD_PIXEL
    }
  })
}

/// Saves the grid as an image. The format is deduced from the extension of
/// `path`.
pub fn save_image(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
  if grid.is_empty() {
    return Err(Error::EmptyImage);
  }

  let path = path.as_ref();
  to_image(grid).save(path).map_err(|source| Error::Image {
    path: path.to_owned(),
    source,
  })?;
  debug!(path = %path.display(), width = grid.width(), height = grid.height(), "saved image");
  Ok(())
}
