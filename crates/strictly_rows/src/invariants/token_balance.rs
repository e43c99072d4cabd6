//! Token balance invariant: Cross moves first and players alternate.

use super::super::{Snapshot, Token};
use super::Invariant;

/// Invariant: crosses outnumber naughts by zero or one.
///
/// While the game is in progress the active token also follows from the
/// counts: Cross to move on equal counts, Naught otherwise.
pub struct TokenBalanceInvariant;

impl Invariant<Snapshot> for TokenBalanceInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let crosses = snapshot.board().count(Token::Cross);
        let naughts = snapshot.board().count(Token::Naught);
        if crosses != naughts && crosses != naughts + 1 {
            return false;
        }
        if snapshot.is_game_over() {
            return true;
        }
        let expected = if crosses == naughts {
            Token::Cross
        } else {
            Token::Naught
        };
        snapshot.active_token() == expected
    }

    fn description() -> &'static str {
        "Crosses outnumber naughts by at most one and turns alternate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Lineup, Seat};

    #[test]
    fn test_alternating_moves_hold() {
        let mut snapshot = Snapshot::new(3, 3, Lineup::with_first(Seat::Two));
        for coord in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(2, 2)] {
            snapshot = snapshot.play(coord).unwrap();
            assert!(TokenBalanceInvariant::holds(&snapshot));
        }
    }

    #[test]
    fn test_wrong_mover_violates() {
        let mut snapshot = Snapshot::new(3, 3, Lineup::with_first(Seat::One));
        snapshot.active = Seat::Two;
        assert!(!TokenBalanceInvariant::holds(&snapshot));
    }
}
