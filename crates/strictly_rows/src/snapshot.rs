//! Point-in-time game snapshots.

use crate::geometry::Coord;
use crate::player::{Lineup, Seat};
use crate::types::{Board, Cell, Token};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The seat that completed a cluster.
    Winner(Seat),
    /// The board filled with no cluster.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(seat) => write!(f, "{seat} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// One point in a game: board contents, whose turn it is, and the result.
///
/// Snapshots are produced either fresh by [`Snapshot::new`] or by exactly
/// one transition from a prior snapshot, and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) count_to_win: usize,
    pub(crate) lineup: Lineup,
    pub(crate) active: Seat,
    pub(crate) game_over: bool,
    pub(crate) winning_cells: Vec<Cell>,
}

impl Snapshot {
    /// Creates the opening snapshot: an empty board with the lineup's first
    /// seat to move, so Cross always opens.
    #[instrument]
    pub fn new(size: usize, count_to_win: usize, lineup: Lineup) -> Self {
        Self {
            board: Board::new(size),
            count_to_win,
            lineup,
            active: lineup.first(),
            game_over: false,
            winning_cells: Vec::new(),
        }
    }

    /// Independent copy for the next transition to work on.
    ///
    /// Copies the board cell by cell along with the game-over flag. Winning
    /// cells always start empty; only a transition that finds a cluster
    /// fills them in.
    #[instrument(skip(self))]
    pub fn fork(&self) -> Self {
        Self {
            board: self.board.clone(),
            count_to_win: self.count_to_win,
            lineup: self.lineup,
            active: self.active,
            game_over: self.game_over,
            winning_cells: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Tokens in a row needed to win.
    pub fn count_to_win(&self) -> usize {
        self.count_to_win
    }

    /// Token assignment for this game.
    pub fn lineup(&self) -> Lineup {
        self.lineup
    }

    /// Seat whose turn it is, or who made the final move once the game is over.
    pub fn active(&self) -> Seat {
        self.active
    }

    /// Token the active seat places.
    pub fn active_token(&self) -> Token {
        self.lineup.token_of(self.active)
    }

    /// Returns true once the game has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Cells of every completed run, possibly with repeats.
    pub fn winning_cells(&self) -> &[Cell] {
        &self.winning_cells
    }

    /// Coordinates of the winning cells.
    pub fn winning_coords(&self) -> Vec<Coord> {
        self.winning_cells.iter().map(Cell::coord).collect()
    }

    /// Returns true if a cluster was completed.
    pub fn is_won(&self) -> bool {
        !self.winning_cells.is_empty()
    }

    /// Returns true if the game ended without a cluster.
    pub fn is_tied(&self) -> bool {
        self.game_over && !self.is_won()
    }

    /// The result, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_won() {
            Some(Outcome::Winner(self.active))
        } else if self.is_tied() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// The winning seat, if any.
    pub fn winner(&self) -> Option<Seat> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Empty cells still open to play; none once the game is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.game_over {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// Number of tokens on the board.
    pub fn move_count(&self) -> usize {
        self.board.cells().filter(|cell| !cell.token().is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening() -> Snapshot {
        Snapshot::new(3, 3, Lineup::with_first(Seat::One))
    }

    #[test]
    fn test_new_snapshot() {
        let snapshot = opening();
        assert_eq!(snapshot.size(), 3);
        assert_eq!(snapshot.active_token(), Token::Cross);
        assert!(!snapshot.is_game_over());
        assert!(!snapshot.is_won());
        assert!(!snapshot.is_tied());
        assert_eq!(snapshot.outcome(), None);
        assert_eq!(snapshot.legal_moves().len(), 9);
    }

    #[test]
    fn test_fork_copies_board_but_not_winning_cells() {
        let mut snapshot = opening();
        snapshot.board.set(Coord::new(0, 0), Token::Cross).unwrap();
        snapshot.winning_cells.push(snapshot.board[Coord::new(0, 0)]);
        snapshot.game_over = true;

        let copy = snapshot.fork();
        assert_eq!(copy.board(), snapshot.board());
        assert!(copy.is_game_over());
        assert!(copy.winning_cells().is_empty());
        assert!(copy.is_tied());
    }

    #[test]
    fn test_fork_is_independent() {
        let snapshot = opening();
        let mut copy = snapshot.fork();
        copy.board.set(Coord::new(1, 1), Token::Naught).unwrap();
        assert_eq!(snapshot.board().token(Coord::new(1, 1)), Some(Token::Empty));
        assert_eq!(snapshot.move_count(), 0);
        assert_eq!(copy.move_count(), 1);
    }
}
