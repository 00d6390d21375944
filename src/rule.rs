use std::fmt::{self, Display};
use crate::grid::Cell;

/// Outer-totalistic Life rule. Bit `n` of a mask is set when a cell with `n`
/// live neighbors is born (dead cells) or survives (alive cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  /// State of a cell in the next generation.
  ///
  /// `neighbors` is at most 8.
  pub fn next(&self, cell: Cell, neighbors: u8) -> Cell {
    debug_assert!(neighbors < 9);
    let mask = match cell {
      Cell::Alive => self.survival,
      Cell::Dead => self.birth,
    };
    Cell::from(mask >> neighbors & 1 != 0)
  }
}

impl Default for Rule {
  fn default() -> Self {
    GAME_OF_LIFE
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}
