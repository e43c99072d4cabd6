//! Coordinate geometry for square grids.
//!
//! Everything here works on `(row, col)` coordinates only and never touches
//! cell contents. Boards map these coordinates through their own grid to
//! build row, column, and diagonal views.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A `(row, col)` position on a square grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Returns true if the coordinate lies on a `size` x `size` grid.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Moves by `step`, returning `None` once the result leaves the grid.
    pub fn offset(self, step: Step, size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(step.d_row)?;
        let col = self.col.checked_add_signed(step.d_col)?;
        let next = Coord::new(row, col);
        next.in_bounds(size).then_some(next)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error parsing a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid coordinate {:?}, expected \"row,col\"", input)]
pub struct CoordParseError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for CoordParseError {}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Parses `"r,c"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoordParseError {
            input: s.to_string(),
        };
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Coord::new(row, col))
    }
}

/// A signed `(Δrow, Δcol)` step between neighbouring coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Step {
    /// Row delta.
    pub d_row: isize,
    /// Column delta.
    pub d_col: isize,
}

impl Step {
    /// Left to right along a row.
    pub const RIGHT: Step = Step { d_row: 0, d_col: 1 };
    /// Top to bottom along a column.
    pub const DOWN: Step = Step { d_row: 1, d_col: 0 };
    /// Down and to the left (`/` shaped lines).
    pub const DOWN_LEFT: Step = Step { d_row: 1, d_col: -1 };
    /// Down and to the right (`\` shaped lines).
    pub const DOWN_RIGHT: Step = Step { d_row: 1, d_col: 1 };

    /// Returns the step pointing the opposite way.
    pub fn reversed(self) -> Step {
        Step::new(-self.d_row, -self.d_col)
    }
}

/// Iterator over the in-bounds coordinates reached by repeatedly adding a step.
///
/// Stops at the first coordinate that leaves the grid. Cloning the iterator
/// restarts the walk from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Traverse {
    size: usize,
    step: Step,
    next: Option<Coord>,
}

impl Iterator for Traverse {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = current.offset(self.step, self.size);
        Some(current)
    }
}

/// Walks from `start` by `step` on a `size` x `size` grid.
///
/// An out-of-bounds start yields an empty walk.
pub fn traverse(size: usize, start: Coord, step: Step) -> Traverse {
    Traverse {
        size,
        step,
        next: start.in_bounds(size).then_some(start),
    }
}

fn trace_from(size: usize, starts: impl IntoIterator<Item = Coord>, step: Step) -> Vec<Vec<Coord>> {
    starts
        .into_iter()
        .map(|start| traverse(size, start, step).collect())
        .collect()
}

/// The `size` row lines, top to bottom.
#[instrument]
pub fn rows(size: usize) -> Vec<Vec<Coord>> {
    trace_from(size, traverse(size, Coord::new(0, 0), Step::DOWN), Step::RIGHT)
}

/// The `size` column lines, left to right.
#[instrument]
pub fn cols(size: usize) -> Vec<Vec<Coord>> {
    let top_row = rows(size).into_iter().next().unwrap_or_default();
    trace_from(size, top_row, Step::DOWN)
}

/// The `2 * size - 1` lines running down and to the left.
///
/// Lines start along the top row (left to right), then down the last column
/// below the shared corner.
#[instrument]
pub fn anti_diags(size: usize) -> Vec<Vec<Coord>> {
    let top_row = rows(size).into_iter().next().unwrap_or_default();
    let right_edge = cols(size).pop().unwrap_or_default().into_iter().skip(1);
    trace_from(size, top_row.into_iter().chain(right_edge), Step::DOWN_LEFT)
}

/// The `2 * size - 1` lines running down and to the right.
///
/// Lines start along the top row (right to left), then down the first column
/// below the shared corner.
#[instrument]
pub fn main_diags(size: usize) -> Vec<Vec<Coord>> {
    let top_row = rows(size).into_iter().next().unwrap_or_default();
    let left_edge = cols(size)
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .skip(1);
    trace_from(size, top_row.into_iter().rev().chain(left_edge), Step::DOWN_RIGHT)
}

/// One of the four families of lines a cluster can lie along.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Horizontal lines.
    #[display("row")]
    Row,
    /// Vertical lines.
    #[display("column")]
    Column,
    /// `/` shaped diagonals.
    #[display("anti-diagonal")]
    AntiDiagonal,
    /// `\` shaped diagonals.
    #[display("main diagonal")]
    MainDiagonal,
}

impl Direction {
    /// The step that walks along a line in this direction.
    pub fn step(self) -> Step {
        match self {
            Direction::Row => Step::RIGHT,
            Direction::Column => Step::DOWN,
            Direction::AntiDiagonal => Step::DOWN_LEFT,
            Direction::MainDiagonal => Step::DOWN_RIGHT,
        }
    }

    /// All lines in this direction, in index order.
    pub fn lines(self, size: usize) -> Vec<Vec<Coord>> {
        match self {
            Direction::Row => rows(size),
            Direction::Column => cols(size),
            Direction::AntiDiagonal => anti_diags(size),
            Direction::MainDiagonal => main_diags(size),
        }
    }

    /// Number of lines in this direction.
    pub fn line_count(self, size: usize) -> usize {
        match self {
            Direction::Row | Direction::Column => size,
            Direction::AntiDiagonal | Direction::MainDiagonal => (2 * size).saturating_sub(1),
        }
    }

    /// Index into [`Direction::lines`] of the line passing through `coord`.
    ///
    /// `coord` must be in bounds.
    pub fn line_index(self, size: usize, coord: Coord) -> usize {
        match self {
            Direction::Row => coord.row,
            Direction::Column => coord.col,
            Direction::AntiDiagonal => coord.row + coord.col,
            Direction::MainDiagonal => coord.row + (size - 1 - coord.col),
        }
    }

    /// The full line through `coord`, ordered the same way as [`Direction::lines`].
    ///
    /// Empty if `coord` is out of bounds.
    #[instrument]
    pub fn line_through(self, size: usize, coord: Coord) -> Vec<Coord> {
        if !coord.in_bounds(size) {
            return Vec::new();
        }
        let back = self.step().reversed();
        let mut start = coord;
        while let Some(prev) = start.offset(back, size) {
            start = prev;
        }
        traverse(size, start, self.step()).collect()
    }
}
