//! Core board types: tokens, cells, and the square grid.

use crate::geometry::{Coord, Direction};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The mark occupying a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Token {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cross, always placed by the player moving first.
    Cross,
    /// Naught.
    Naught,
}

impl Token {
    /// Returns the opposing player token. `Empty` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Token::Cross => Token::Naught,
            Token::Naught => Token::Cross,
            Token::Empty => Token::Empty,
        }
    }

    /// Returns true for `Empty`.
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// Single character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Token::Empty => '.',
            Token::Cross => 'X',
            Token::Naught => 'O',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One square of the grid: its token and its fixed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Cell {
    token: Token,
    row: usize,
    col: usize,
}

impl Cell {
    /// The token currently in the cell.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Row index, fixed at creation.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, fixed at creation.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The cell's address.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Replaces the token in place.
    pub fn set_token(&mut self, token: Token) {
        self.token = token;
    }
}

/// Square grid of cells, stored row-major.
///
/// `grid[r][c]` always addresses itself as `(r, c)`. Each board owns its
/// cells; cloning a board copies every cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates a `size` x `size` board of empty cells.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let grid = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| Cell::new(Token::Empty, row, col))
                    .collect()
            })
            .collect();
        Self { size, grid }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The grid organized by rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Gets the cell at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.grid.get(coord.row)?.get(coord.col)
    }

    /// Gets a mutable cell at `coord`, or `None` if out of bounds.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.grid.get_mut(coord.row)?.get_mut(coord.col)
    }

    /// Returns the token at `coord`, or `None` if out of bounds.
    pub fn token(&self, coord: Coord) -> Option<Token> {
        self.get(coord).map(Cell::token)
    }

    /// Sets the token at `coord`.
    pub fn set(&mut self, coord: Coord, token: Token) -> Result<(), &'static str> {
        let cell = self.get_mut(coord).ok_or("Position out of bounds")?;
        cell.set_token(token);
        Ok(())
    }

    /// Checks if a cell is in bounds and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.token(coord), Some(Token::Empty))
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|cell| cell.token().is_empty())
            .map(Cell::coord)
            .collect()
    }

    /// Counts cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells().filter(|cell| cell.token() == token).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.token().is_empty())
    }

    /// Resets every cell to `Empty` in place.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn clear(&mut self) {
        self.grid
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.set_token(Token::Empty));
    }

    /// All lines in `direction`, as views onto this board's cells.
    ///
    /// Line order follows [`Direction::lines`], so the line through a cell can
    /// be found with [`Direction::line_index`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn lines(&self, direction: Direction) -> Vec<Vec<&Cell>> {
        direction
            .lines(self.size)
            .into_iter()
            .map(|line| self.resolve(&line))
            .collect()
    }

    /// The full line in `direction` passing through `coord`.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn line_through(&self, direction: Direction, coord: Coord) -> Vec<&Cell> {
        self.resolve(&direction.line_through(self.size, coord))
    }

    fn resolve(&self, coords: &[Coord]) -> Vec<&Cell> {
        coords.iter().filter_map(|coord| self.get(*coord)).collect()
    }
}

impl std::ops::Index<Coord> for Board {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    fn index(&self, coord: Coord) -> &Cell {
        &self.grid[coord.row][coord.col]
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid as rows of `X|O|.` separated by `-+-+-` lines.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.token().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
