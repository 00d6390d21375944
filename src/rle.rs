use std::iter;
use std::mem;
use std::sync::OnceLock;
use itertools::Itertools;
use regex::Regex;
use crate::error::FormatError;
use crate::grid::*;
use crate::universe::Universe;

/// Longest line produced by [`write`], as recommended for RLE files.
const MAX_LINE_LEN: usize = 70;

/// Header fields and pattern body of an RLE file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  /// Declared width of the bounding box.
  pub width: u32,
  /// Declared height of the bounding box.
  pub height: u32,
  /// Body lines joined into a single token stream.
  pub body: String,
}

fn header_re() -> &'static Regex {
  static HEADER_RE: OnceLock<Regex> = OnceLock::new();
  HEADER_RE.get_or_init(|| {
    Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,.*)?$")
      .expect("header regex is valid")
  })
}

/// Read the header and body of a Life pattern in RLE format.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
///
/// Lines starting with `#` are skipped. The `rule` header field is accepted
/// but not interpreted.
pub fn read(src: impl AsRef<str>) -> Result<Pattern, FormatError> {
  let mut header = None;
  let mut body = String::new();
  let mut has_body = false;

  for line in src.as_ref().lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    if header.is_none() && line.starts_with('x') {
      header = Some(parse_header(line)?);
    } else {
      body.push_str(line);
      has_body = true;
    }
  }

  if !has_body {
    return Err(FormatError::NoPatternLines);
  }
  let (width, height) = header.ok_or(FormatError::MissingHeader)?;

  Ok(Pattern { width, height, body })
}

fn parse_header(line: &str) -> Result<(u32, u32), FormatError> {
  let invalid = || FormatError::InvalidHeader(line.to_owned());
  let caps = header_re().captures(line).ok_or_else(invalid)?;
  let width: u32 = caps[1].parse().map_err(|_| invalid())?;
  let height: u32 = caps[2].parse().map_err(|_| invalid())?;
  if width == 0 || height == 0 {
    return Err(FormatError::EmptyDimension { width, height });
  }
  Ok((width, height))
}

/// Decode an RLE token stream into a grid.
///
/// Rows may stop short of the declared width; they are filled up with dead
/// cells to the widest row. Anything after `!` is ignored.
pub fn decode(body: &str) -> Result<Grid, FormatError> {
  let mut rows: Vec<Vec<Cell>> = vec![];
  let mut row = vec![];
  let mut run = String::new();

  for (offset, ch) in body.char_indices() {
    match ch {
      '0'..='9' => run.push(ch),
      'b' | 'o' => {
        let num = take_run(&mut run)?;
        let cell = Cell::from(ch == 'o');
        row.extend(iter::repeat(cell).take(num));
      }
      '$' => {
        let num = take_run(&mut run)?;
        rows.push(mem::take(&mut row));
        rows.extend(iter::repeat_with(Vec::new).take(num - 1));
      }
      '!' => {
        take_run(&mut run)?;
        rows.push(row);
        return Ok(Grid::from_rows(rows));
      }
      _ => {
        return Err(FormatError::UnexpectedChar { ch, offset });
      }
    }
  }

  Err(FormatError::MissingTerminator)
}

/// Flushes the pending run count. An absent or zero count means 1.
fn take_run(run: &mut String) -> Result<usize, FormatError> {
  if run.is_empty() {
    return Ok(1);
  }
  let num: usize = run
    .parse()
    .map_err(|_| FormatError::InvalidRunCount(run.clone()))?;
  run.clear();
  Ok(num.max(1))
}

/// Encode a grid as an RLE token stream, without header.
///
/// Trailing dead cells of the last row are dropped. The grid without rows
/// encodes as `!`.
pub fn encode(grid: &Grid) -> String {
  tokens(grid).concat()
}

/// Write a Life pattern to a RLE string, with header line and with body lines
/// wrapped at 70 characters.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(univ: &Universe) -> String {
  let grid = univ.grid();
  let mut output = format!(
    "x = {}, y = {}, rule = {}\n",
    grid.width(),
    grid.height(),
    univ.rule()
  );

  let mut line_len = 0;
  for token in tokens(grid) {
    if line_len > 0 && line_len + token.len() > MAX_LINE_LEN {
      output.push('\n');
      line_len = 0;
    }
    line_len += token.len();
    output.push_str(&token);
  }

  output.push('\n');
  output
}

fn tokens(grid: &Grid) -> Vec<String> {
  let mut tokens = vec![];
  let height = grid.height();

  for (y, row) in grid.rows().enumerate() {
    let is_last = y + 1 == height;
    let groups = row.iter().group_by(|&&cell| cell);
    let mut runs = (&groups)
      .into_iter()
      .map(|(cell, run)| (cell, run.count()))
      .collect::<Vec<_>>();

    if is_last && matches!(runs.last(), Some((Cell::Dead, _))) {
      runs.pop();
    }

    tokens.extend(runs.into_iter().map(|(cell, num)| RleUnit::from(cell).token(num)));
    let end = if is_last { RleUnit::End } else { RleUnit::NextRow };
    tokens.push(end.token(1));
  }

  if height == 0 {
    tokens.push(RleUnit::End.token(1));
  }

  tokens
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
  End,
}

impl From<Cell> for RleUnit {
  fn from(cell: Cell) -> Self {
    match cell {
      Cell::Dead => Self::Dead,
      Cell::Alive => Self::Alive,
    }
  }
}

impl RleUnit {
  fn token(self, num: usize) -> String {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
      Self::End => '!',
    };

    if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    }
  }
}
