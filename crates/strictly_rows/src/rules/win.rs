//! Cluster detection.

use super::super::{Board, Cell, Coord, Direction, Token};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Scans `line` for `count_to_win` consecutive cells holding `token`.
///
/// The running count resets on any other token, `Empty` included. Returns
/// the first complete run, or `None`.
pub fn find_cluster(line: &[&Cell], token: Token, count_to_win: usize) -> Option<Vec<Cell>> {
    if token.is_empty() || count_to_win == 0 {
        return None;
    }
    let mut count = 0;
    for (index, cell) in line.iter().enumerate() {
        if cell.token() == token {
            count += 1;
        } else {
            count = 0;
        }
        if count == count_to_win {
            let start = index + 1 - count_to_win;
            return Some(line[start..=index].iter().map(|cell| **cell).collect());
        }
    }
    None
}

/// Collects every winning cell on the four lines through `coord`.
///
/// The token at `coord` is the one being matched. Each line that holds a
/// cluster contributes its run, so cells shared by two runs appear twice.
/// Returns an empty list when no line is complete.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_cells(board: &Board, coord: Coord, count_to_win: usize) -> Vec<Cell> {
    let Some(token) = board.token(coord) else {
        return Vec::new();
    };
    let size = board.size();
    let mut cells = Vec::new();
    for direction in Direction::iter() {
        let lines = board.lines(direction);
        let Some(line) = lines.get(direction.line_index(size, coord)) else {
            continue;
        };
        if let Some(run) = find_cluster(line, token, count_to_win) {
            debug!(%direction, %coord, ?token, "Cluster found");
            cells.extend(run);
        }
    }
    cells
}

/// Checks every line on the board for a cluster.
///
/// Returns the token of the first cluster found, `None` otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board, count_to_win: usize) -> Option<Token> {
    Direction::iter()
        .flat_map(|direction| board.lines(direction))
        .find_map(|line| {
            [Token::Cross, Token::Naught]
                .into_iter()
                .find(|token| find_cluster(&line, *token, count_to_win).is_some())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, token: Token, coords: &[(usize, usize)]) {
        for (row, col) in coords {
            board.set(Coord::new(*row, *col), token).unwrap();
        }
    }

    fn coords(cells: &[Cell]) -> Vec<(usize, usize)> {
        cells.iter().map(|cell| (cell.row(), cell.col())).collect()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_winner(&board, 3), None);
        assert!(winning_cells(&board, Coord::new(1, 1), 3).is_empty());
    }

    #[test]
    fn test_find_cluster_resets_on_gap() {
        let mut board = Board::new(5);
        place(&mut board, Token::Cross, &[(0, 0), (0, 1), (0, 3), (0, 4)]);
        let row = &board.lines(Direction::Row)[0];
        assert_eq!(find_cluster(row, Token::Cross, 3), None);
        assert!(find_cluster(row, Token::Cross, 2).is_some());
    }

    #[test]
    fn test_find_cluster_returns_trailing_run() {
        let mut board = Board::new(5);
        place(&mut board, Token::Naught, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        let row = &board.lines(Direction::Row)[2];
        let run = find_cluster(row, Token::Naught, 4).unwrap();
        assert_eq!(coords(&run), vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_winning_cells_column() {
        let mut board = Board::new(3);
        place(&mut board, Token::Naught, &[(0, 2), (1, 2), (2, 2)]);
        let cells = winning_cells(&board, Coord::new(1, 2), 3);
        assert_eq!(coords(&cells), vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(check_winner(&board, 3), Some(Token::Naught));
    }

    #[test]
    fn test_winning_cells_anti_diagonal() {
        let mut board = Board::new(5);
        place(&mut board, Token::Cross, &[(0, 4), (1, 3), (2, 2), (3, 1)]);
        let cells = winning_cells(&board, Coord::new(3, 1), 4);
        assert_eq!(coords(&cells), vec![(0, 4), (1, 3), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_winning_cells_main_diagonal_off_center() {
        let mut board = Board::new(7);
        place(
            &mut board,
            Token::Cross,
            &[(1, 0), (2, 1), (3, 2), (4, 3), (5, 4)],
        );
        let cells = winning_cells(&board, Coord::new(3, 2), 5);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].coord(), Coord::new(1, 0));
    }

    #[test]
    fn test_winning_cells_multiple_lines() {
        let mut board = Board::new(3);
        place(
            &mut board,
            Token::Cross,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)],
        );
        let cells = winning_cells(&board, Coord::new(0, 0), 3);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|cell| cell.token() == Token::Cross));
    }

    #[test]
    fn test_other_token_does_not_win() {
        let mut board = Board::new(3);
        place(&mut board, Token::Cross, &[(0, 0), (0, 1)]);
        place(&mut board, Token::Naught, &[(0, 2)]);
        assert!(winning_cells(&board, Coord::new(0, 2), 3).is_empty());
        assert_eq!(check_winner(&board, 3), None);
    }
}
