use std::fmt::{self, Display};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
  Dead,
  Alive,
}

impl Cell {
  pub fn is_alive(self) -> bool {
    self == Cell::Alive
  }
}

impl From<bool> for Cell {
  fn from(alive: bool) -> Self {
    if alive {
      Cell::Alive
    } else {
      Cell::Dead
    }
  }
}

impl Default for Cell {
  fn default() -> Self {
    Cell::Dead
  }
}

/// A finite, rectangular grid of cells stored row-major.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid {
  width: usize,
  height: usize,
  cells: Vec<Cell>,
}

impl Grid {
  /// The grid with no rows and no columns.
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn new_dead(width: usize, height: usize) -> Self {
    Self {
      width,
      height,
      cells: vec![Cell::Dead; width * height],
    }
  }

  /// Builds a grid from possibly ragged rows. Short rows are filled up with
  /// dead cells to the length of the longest row.
  pub fn from_rows<I, R>(rows: I) -> Self
  where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = Cell>,
  {
    let rows = rows
      .into_iter()
      .map(|row| row.into_iter().collect::<Vec<_>>())
      .collect::<Vec<_>>();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let height = rows.len();

    let mut cells = Vec::with_capacity(width * height);
    for mut row in rows {
      row.resize(width, Cell::Dead);
      cells.extend(row);
    }

    Self { width, height, cells }
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn is_empty(&self) -> bool {
    self.height == 0 || self.width == 0
  }

  /// Cell at column `x`, row `y`. Anything outside the grid is dead.
  pub fn get(&self, x: isize, y: isize) -> Cell {
    if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
      Cell::Dead
    } else {
      self.cells[y as usize * self.width + x as usize]
    }
  }

  pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
    assert!(x < self.width && y < self.height, "({}, {}) is out of bounds", x, y);
    self.cells[y * self.width + x] = cell;
  }

  pub fn row(&self, y: usize) -> &[Cell] {
    &self.cells[y * self.width..(y + 1) * self.width]
  }

  pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
    (0..self.height).map(move |y| self.row(y))
  }

  /// Number of alive cells.
  pub fn population(&self) -> usize {
    self.cells.iter().filter(|c| c.is_alive()).count()
  }

  /// Returns `(left, top, right, bottom)` of the live cells, where right and
  /// bottom are exclusive, or `None` if every cell is dead.
  pub fn boundary(&self) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (y, row) in self.rows().enumerate() {
      let left = match row.iter().position(|c| c.is_alive()) {
        Some(left) => left,
        None => continue,
      };
      let right = row.iter().rposition(|c| c.is_alive()).unwrap_or(left) + 1;
      bounds = Some(match bounds {
        None => (left, y, right, y + 1),
        Some((l, t, r, _)) => (l.min(left), t, r.max(right), y + 1),
      });
    }
    bounds
  }
}

/// Surrounds the grid with a one-cell dead border.
pub fn pad(grid: &Grid) -> Grid {
  let mut padded = Grid::new_dead(grid.width + 2, grid.height + 2);
  for (y, row) in grid.rows().enumerate() {
    let start = (y + 1) * padded.width + 1;
    padded.cells[start..start + grid.width].copy_from_slice(row);
  }
  padded
}

/// Restricts the grid to the minimal bounding box of its live cells. A grid
/// without live cells crops to [`Grid::empty`].
pub fn crop(grid: &Grid) -> Grid {
  let (left, top, right, bottom) = match grid.boundary() {
    Some(bounds) => bounds,
    None => return Grid::empty(),
  };

  let width = right - left;
  let height = bottom - top;
  let mut cells = Vec::with_capacity(width * height);
  for y in top..bottom {
    cells.extend_from_slice(&grid.row(y)[left..right]);
  }

  Grid { width, height, cells }
}

impl Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in self.rows() {
      for &cell in row {
        f.write_str(if cell.is_alive() { "#" } else { "." })?;
      }
      f.write_str("\n")?;
    }
    Ok(())
  }
}

#[cfg(test)]
pub(crate) fn grid_of(rows: &[&[u8]]) -> Grid {
  Grid::from_rows(rows.iter().map(|row| row.iter().map(|&c| Cell::from(c != 0))))
}
