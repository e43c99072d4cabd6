//! History invariants: a valid cursor over snapshots of one game.

use super::super::History;
use super::Invariant;

/// Invariant: the history is non-empty and the cursor points into it.
pub struct CursorInRangeInvariant;

impl Invariant<History> for CursorInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}

/// Invariant: every snapshot belongs to the same game setup.
///
/// Size, run length, and lineup never change within one history.
pub struct ConsistentRulesInvariant;

impl Invariant<History> for ConsistentRulesInvariant {
    fn holds(history: &History) -> bool {
        let Some(first) = history.snapshots().first() else {
            return false;
        };
        history.snapshots().iter().all(|snapshot| {
            snapshot.size() == first.size()
                && snapshot.count_to_win() == first.count_to_win()
                && snapshot.lineup() == first.lineup()
        })
    }

    fn description() -> &'static str {
        "All snapshots share board size, run length, and lineup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Seat};

    #[test]
    fn test_holds_through_navigation() {
        let mut history = History::start_new_game(3, Seat::One).unwrap();
        history.play(Coord::new(0, 0)).unwrap();
        history.play(Coord::new(1, 1)).unwrap();
        history.go_back().unwrap();
        assert!(CursorInRangeInvariant::holds(&history));
        assert!(ConsistentRulesInvariant::holds(&history));
    }
}
