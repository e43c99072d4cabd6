//! Cell addressing invariant: every cell knows where it sits.

use super::super::{Coord, Snapshot};
use super::Invariant;

/// Invariant: the grid is square and `grid[r][c]` is addressed `(r, c)`.
pub struct CellAddressingInvariant;

impl Invariant<Snapshot> for CellAddressingInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let size = snapshot.size();
        let rows = snapshot.board().rows();
        rows.len() == size
            && rows.iter().enumerate().all(|(row, cells)| {
                cells.len() == size
                    && cells
                        .iter()
                        .enumerate()
                        .all(|(col, cell)| cell.coord() == Coord::new(row, col))
            })
    }

    fn description() -> &'static str {
        "Every cell is addressed by its grid position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lineup;

    #[test]
    fn test_holds_for_all_sizes() {
        for size in [3, 5, 7] {
            let snapshot = Snapshot::new(size, 3, Lineup::default());
            assert!(CellAddressingInvariant::holds(&snapshot));
        }
    }
}
