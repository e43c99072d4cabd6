//! Tie detection.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no cluster of `count_to_win` is a tie.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_tie(board: &Board, count_to_win: usize) -> bool {
    is_full(board) && check_winner(board, count_to_win).is_none()
}
