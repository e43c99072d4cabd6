//! Winning cells invariant: recorded clusters match the board.

use super::super::rules::check_winner;
use super::super::Snapshot;
use super::Invariant;

/// Invariant: winning cells are present exactly when a cluster exists.
///
/// A won snapshot is over, every winning cell matches the board and holds
/// the same non-empty token, and the cells split into whole runs.
pub struct WinningCellsInvariant;

impl Invariant<Snapshot> for WinningCellsInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let cells = snapshot.winning_cells();
        let has_cluster = check_winner(snapshot.board(), snapshot.count_to_win()).is_some();
        let Some(first) = cells.first() else {
            return !has_cluster;
        };
        has_cluster
            && snapshot.is_game_over()
            && !first.token().is_empty()
            && cells.len() % snapshot.count_to_win() == 0
            && cells.iter().all(|cell| {
                cell.token() == first.token()
                    && snapshot.board().get(cell.coord()) == Some(cell)
            })
    }

    fn description() -> &'static str {
        "Winning cells are recorded exactly when a cluster is on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Lineup, Token};

    #[test]
    fn test_holds_after_win() {
        let mut snapshot = Snapshot::new(3, 3, Lineup::default());
        for coord in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            snapshot = snapshot.play(Coord::new(coord.0, coord.1)).unwrap();
        }
        assert!(snapshot.is_won());
        assert!(WinningCellsInvariant::holds(&snapshot));
    }

    #[test]
    fn test_unrecorded_cluster_violates() {
        let mut snapshot = Snapshot::new(3, 3, Lineup::default());
        for col in 0..3 {
            snapshot.board.set(Coord::new(2, col), Token::Cross).unwrap();
        }
        assert!(!WinningCellsInvariant::holds(&snapshot));
    }

    #[test]
    fn test_stale_winning_cell_violates() {
        let mut snapshot = Snapshot::new(3, 3, Lineup::default());
        for col in 0..3 {
            snapshot.board.set(Coord::new(0, col), Token::Cross).unwrap();
        }
        snapshot.winning_cells = snapshot.board().rows()[0].clone();
        snapshot.game_over = true;
        assert!(WinningCellsInvariant::holds(&snapshot));

        snapshot.board.set(Coord::new(0, 2), Token::Naught).unwrap();
        assert!(!WinningCellsInvariant::holds(&snapshot));
    }
}
