//! First-class invariants for snapshots and histories.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and back the move postconditions.

pub mod cell_addressing;
pub mod history_consistent;
pub mod token_balance;
pub mod winning_cells;

pub use cell_addressing::CellAddressingInvariant;
pub use history_consistent::{ConsistentRulesInvariant, CursorInRangeInvariant};
pub use token_balance::TokenBalanceInvariant;
pub use winning_cells::WinningCellsInvariant;

// ─────────────────────────────────────────────────────────────
//  Invariant Trait
// ─────────────────────────────────────────────────────────────

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariant Sets
// ─────────────────────────────────────────────────────────────

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Snapshot and History Sets
// ─────────────────────────────────────────────────────────────

/// Invariants every snapshot satisfies.
pub type SnapshotInvariants = (
    CellAddressingInvariant,
    TokenBalanceInvariant,
    WinningCellsInvariant,
);

/// Invariants every history satisfies.
pub type HistoryInvariants = (CursorInRangeInvariant, ConsistentRulesInvariant);

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Lineup, Seat, Snapshot, Token};

    fn opening() -> Snapshot {
        Snapshot::new(3, 3, Lineup::with_first(Seat::One))
    }

    #[test]
    fn test_invariant_set_holds_for_opening() {
        assert!(SnapshotInvariants::check_all(&opening()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let snapshot = opening()
            .play(Coord::new(0, 0))
            .and_then(|s| s.play(Coord::new(1, 1)))
            .and_then(|s| s.play(Coord::new(2, 2)))
            .unwrap();
        assert!(SnapshotInvariants::check_all(&snapshot).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut snapshot = opening();
        snapshot.board.set(Coord::new(0, 0), Token::Naught).unwrap();
        snapshot.board.set(Coord::new(0, 1), Token::Naught).unwrap();
        snapshot.board.set(Coord::new(0, 2), Token::Naught).unwrap();

        let violations = SnapshotInvariants::check_all(&snapshot).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(describe(&violations).contains("Crosses"));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CellAddressingInvariant, TokenBalanceInvariant);
        assert!(TwoInvariants::check_all(&opening()).is_ok());
    }
}
