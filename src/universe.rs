use tracing::{debug, trace};
use crate::error::Result;
use crate::grid::*;
use crate::rle;
use crate::rule::*;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
  (-1, -1), (0, -1), (1, -1),
  (-1, 0), (1, 0),
  (-1, 1), (0, 1), (1, 1),
];

/// A pattern together with the rule it evolves under.
///
/// After every generation the grid is cropped to the bounding box of its
/// live cells.
#[derive(Debug, Clone)]
pub struct Universe {
  grid: Grid,
  rule: Rule,
  generation: u64,
}

impl Universe {
  pub fn new(grid: Grid) -> Self {
    Self::with_rule(grid, GAME_OF_LIFE)
  }

  pub fn with_rule(grid: Grid, rule: Rule) -> Self {
    Self {
      grid,
      rule,
      generation: 0,
    }
  }

  /// Decodes a complete RLE file.
  pub fn read(src: impl AsRef<str>) -> Result<Self> {
    let pattern = rle::read(src)?;
    let grid = rle::decode(&pattern.body)?;
    debug!(
      width = pattern.width,
      height = pattern.height,
      decoded_width = grid.width(),
      decoded_height = grid.height(),
      "decoded pattern"
    );
    Ok(Self::new(grid))
  }

  /// `num_gen` is number of generations.
  pub fn simulate(&mut self, num_gen: u64) {
    for _ in 0..num_gen {
      let next = evolve_once_with(&pad(&self.grid), self.rule);
      self.grid = crop(&next);
      self.generation += 1;
      trace!(
        generation = self.generation,
        population = self.grid.population(),
        "advanced one generation"
      );
    }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn into_grid(self) -> Grid {
    self.grid
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn population(&self) -> usize {
    self.grid.population()
  }
}

/// Advances a padded grid by one Game of Life generation.
pub fn evolve_once(grid: &Grid) -> Grid {
  evolve_once_with(grid, GAME_OF_LIFE)
}

/// Advances the grid by one generation of `rule`. Cells outside the grid
/// count as dead, so live cells should not touch the border.
pub fn evolve_once_with(grid: &Grid, rule: Rule) -> Grid {
  let mut next = Grid::new_dead(grid.width(), grid.height());
  for y in 0..grid.height() {
    for x in 0..grid.width() {
      let (cx, cy) = (x as isize, y as isize);
      let neighbors = NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(cx + dx, cy + dy).is_alive())
        .count() as u8;
      next.set(x, y, rule.next(grid.get(cx, cy), neighbors));
    }
  }
  next
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn glider() -> Grid {
    grid_of(&[
      &[0, 1, 0],
      &[0, 0, 1],
      &[1, 1, 1],
    ])
  }

  #[test]
  fn evolve_padded_glider() {
    let next = evolve_once(&pad(&glider()));
    assert_eq!(next, grid_of(&[
      &[0, 0, 0, 0, 0],
      &[0, 0, 0, 0, 0],
      &[0, 1, 0, 1, 0],
      &[0, 0, 1, 1, 0],
      &[0, 0, 1, 0, 0],
    ]));
  }

  #[test]
  fn evolve_is_deterministic() {
    let padded = pad(&glider());
    assert_eq!(evolve_once(&padded), evolve_once(&padded));
  }

  #[test]
  fn edges_do_not_wrap() {
    // with wrap-around the right column would see the left one and be born
    let grid = grid_of(&[
      &[1, 0, 0],
      &[1, 0, 0],
      &[1, 0, 0],
    ]);
    assert_eq!(evolve_once(&grid), grid_of(&[
      &[0, 0, 0],
      &[1, 1, 0],
      &[0, 0, 0],
    ]));
  }

  #[test]
  fn lonely_cell_dies() {
    assert_eq!(evolve_once(&pad(&grid_of(&[&[1]]))), Grid::new_dead(3, 3));
  }

  #[test]
  fn degenerate_grids() {
    assert_eq!(evolve_once(&Grid::empty()), Grid::empty());
    let flat = Grid::new_dead(0, 3);
    assert_eq!(evolve_once(&flat), flat);
  }

  #[test]
  fn block_is_still_life() {
    let block = grid_of(&[&[1, 1], &[1, 1]]);
    let mut uni = Universe::new(block.clone());
    uni.simulate(5);
    assert_eq!(uni.grid(), &block);
    assert_eq!(uni.generation(), 5);
  }

  #[test]
  fn blinker_oscillates() {
    let vertical = grid_of(&[&[1], &[1], &[1]]);
    let horizontal = grid_of(&[&[1, 1, 1]]);
    let mut uni = Universe::new(vertical.clone());
    uni.simulate(1);
    assert_eq!(uni.grid(), &horizontal);
    uni.simulate(1);
    assert_eq!(uni.grid(), &vertical);
  }

  #[test]
  fn glider_period() {
    let mut uni = Universe::new(glider());
    uni.simulate(4);
    assert_eq!(uni.grid(), &glider());
    assert_eq!(uni.population(), 5);
  }

  #[test]
  fn pattern_dies_out() {
    let mut uni = Universe::new(grid_of(&[&[1, 1]]));
    uni.simulate(1);
    assert_eq!(uni.grid(), &Grid::empty());
    uni.simulate(3);
    assert_eq!(uni.grid(), &Grid::empty());
  }

  #[test]
  fn zero_generations_keep_grid() {
    let padded = pad(&glider());
    let mut uni = Universe::new(padded.clone());
    uni.simulate(0);
    assert_eq!(uni.grid(), &padded);
    uni.simulate(1);
    assert_eq!(uni.grid().width(), 3);
  }
}
