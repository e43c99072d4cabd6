//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}.

use crate::error::MoveError;
use crate::geometry::Coord;
use crate::invariants::{
    Invariant, InvariantSet, SnapshotInvariants, TokenBalanceInvariant, describe,
};
use crate::snapshot::Snapshot;
use crate::types::Token;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target lies on the board.
pub struct TargetInBounds;

impl TargetInBounds {
    /// Rejects coordinates outside the grid.
    #[instrument(skip(snapshot))]
    pub fn check(target: &Coord, snapshot: &Snapshot) -> Result<(), MoveError> {
        if target.in_bounds(snapshot.size()) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: target.row,
                col: target.col,
                size: snapshot.size(),
            })
        }
    }
}

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves on a won or tied snapshot.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveError> {
        if snapshot.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied targets.
    #[instrument(skip(snapshot))]
    pub fn check(target: &Coord, snapshot: &Snapshot) -> Result<(), MoveError> {
        if snapshot.board().is_empty(*target) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: target.row,
                col: target.col,
            })
        }
    }
}

/// Precondition: the active seat follows from the token counts.
///
/// Fails only for hand-built or deserialized snapshots.
pub struct TurnOrder;

impl TurnOrder {
    /// Rejects snapshots where the active token does not follow from the
    /// token counts.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveError> {
        if TokenBalanceInvariant::holds(snapshot) {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Precondition failed: {}",
                TokenBalanceInvariant::description()
            )))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite Preconditions
// ─────────────────────────────────────────────────────────────

/// Composite precondition: in bounds, game running, target empty, turn order intact.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(snapshot))]
    pub fn check(target: &Coord, snapshot: &Snapshot) -> Result<(), MoveError> {
        TargetInBounds::check(target, snapshot)?;
        GameInProgress::check(snapshot)?;
        CellIsEmpty::check(target, snapshot)?;
        TurnOrder::check(snapshot)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing the active token.
///
/// Postconditions:
/// - exactly one cell changed, from `Empty` to the mover's token
/// - the turn passes on unless the game ended
/// - snapshot invariants hold
pub struct MoveContract;

impl Contract<Snapshot, Coord> for MoveContract {
    fn pre(snapshot: &Snapshot, target: &Coord) -> Result<(), MoveError> {
        LegalMove::check(target, snapshot)
    }

    fn post(before: &Snapshot, after: &Snapshot) -> Result<(), MoveError> {
        let changed: Vec<_> = before
            .board()
            .cells()
            .zip(after.board().cells())
            .filter(|(old, new)| old.token() != new.token())
            .collect();
        let placed_ok = matches!(
            changed.as_slice(),
            [(old, new)] if old.token() == Token::Empty && new.token() == before.active_token()
        );
        if !placed_ok {
            warn!(changed = changed.len(), "Move changed the wrong cells");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one empty cell receives the mover's token"
                    .to_string(),
            ));
        }

        let expected_active = if after.is_game_over() {
            before.active()
        } else {
            before.active().other()
        };
        if after.active() != expected_active {
            warn!(active = %after.active(), "Turn did not pass correctly");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn passes only while the game continues".to_string(),
            ));
        }

        SnapshotInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe(&violations)
            ))
        })
    }
}
