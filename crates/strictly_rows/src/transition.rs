//! Snapshot transition: one legal move from an old snapshot to a new one.

use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::geometry::Coord;
use crate::rules;
use crate::snapshot::Snapshot;
use tracing::{debug, info, instrument, warn};

/// Applies the active seat's move at `target`, producing a new snapshot.
///
/// The source is never touched: the move is played on a fresh copy. After
/// placing the token the four lines through `target` are scanned for a
/// cluster. A win or a full board ends the game and leaves the active seat
/// as the one who moved; otherwise the turn passes.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`], [`MoveError::GameOver`], or
/// [`MoveError::CellOccupied`] if the move is illegal. In debug builds a
/// failed postcondition is reported as [`MoveError::InvariantViolation`].
#[instrument(skip(source), fields(row = target.row, col = target.col, active = %source.active()))]
pub fn transition(source: &Snapshot, target: Coord) -> Result<Snapshot, MoveError> {
    let mut next = source.fork();

    if let Err(e) = MoveContract::pre(&next, &target) {
        warn!(error = %e, "Move rejected");
        return Err(e);
    }

    let token = next.active_token();
    next.board.set(target, token).map_err(|_| MoveError::OutOfBounds {
        row: target.row,
        col: target.col,
        size: next.size(),
    })?;
    debug!(?token, "Token placed");

    let winning = rules::winning_cells(&next.board, target, next.count_to_win);
    if !winning.is_empty() {
        info!(winner = %next.active, cells = winning.len(), "Game won");
        next.winning_cells = winning;
        next.game_over = true;
    } else if rules::is_full(&next.board) {
        info!("Game tied");
        next.game_over = true;
    } else {
        next.active = next.active.other();
    }

    #[cfg(debug_assertions)]
    MoveContract::post(source, &next)?;

    Ok(next)
}

impl Snapshot {
    /// Plays the active seat's token at `target`. See [`transition`].
    pub fn play(&self, target: Coord) -> Result<Snapshot, MoveError> {
        transition(self, target)
    }
}
