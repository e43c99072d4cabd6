//! Tests for single-move snapshot transitions.

use strictly_rows::{
    Contract, Coord, Lineup, MoveContract, MoveError, Outcome, Seat, Snapshot, Token, transition,
};

fn opening(size: usize, count_to_win: usize) -> Snapshot {
    Snapshot::new(size, count_to_win, Lineup::with_first(Seat::One))
}

fn play_all(mut snapshot: Snapshot, moves: &[(usize, usize)]) -> Snapshot {
    for (row, col) in moves {
        snapshot = transition(&snapshot, Coord::new(*row, *col)).unwrap();
    }
    snapshot
}

fn sorted(mut coords: Vec<Coord>) -> Vec<Coord> {
    coords.sort();
    coords
}

#[test]
fn test_players_alternate() {
    let first = transition(&opening(3, 3), Coord::new(0, 0)).unwrap();
    assert_eq!(first.active(), Seat::Two);
    assert_eq!(first.board().token(Coord::new(0, 0)), Some(Token::Cross));

    let second = transition(&first, Coord::new(1, 1)).unwrap();
    assert_eq!(second.active(), Seat::One);
    assert_eq!(second.board().token(Coord::new(1, 1)), Some(Token::Naught));
}

#[test]
fn test_occupied_target_changes_nothing() {
    let snapshot = play_all(opening(3, 3), &[(1, 1)]);
    let result = transition(&snapshot, Coord::new(1, 1));
    assert_eq!(result, Err(MoveError::CellOccupied { row: 1, col: 1 }));
    assert_eq!(snapshot.active(), Seat::Two);
    assert_eq!(snapshot.move_count(), 1);
}

#[test]
fn test_out_of_bounds_rejected() {
    let result = transition(&opening(3, 3), Coord::new(0, 3));
    assert!(matches!(result, Err(MoveError::OutOfBounds { size: 3, .. })));
}

#[test]
fn test_diagonal_win_on_three() {
    let snapshot = play_all(opening(3, 3), &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
    assert!(snapshot.is_game_over());
    assert_eq!(snapshot.outcome(), Some(Outcome::Winner(Seat::One)));
    assert_eq!(snapshot.active(), Seat::One);
    assert_eq!(
        sorted(snapshot.winning_coords()),
        vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
    );
}

#[test]
fn test_tie_on_three() {
    let snapshot = play_all(
        opening(3, 3),
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(snapshot.is_game_over());
    assert!(snapshot.is_tied());
    assert!(snapshot.winning_cells().is_empty());
    assert_eq!(snapshot.outcome(), Some(Outcome::Tie));
    assert!(snapshot.legal_moves().is_empty());
}

#[test]
fn test_row_win_on_five() {
    let snapshot = play_all(
        opening(5, 4),
        &[(2, 0), (0, 0), (2, 1), (0, 1), (2, 2), (0, 2), (2, 3)],
    );
    assert_eq!(snapshot.winner(), Some(Seat::One));
    assert_eq!(
        sorted(snapshot.winning_coords()),
        (0..4).map(|col| Coord::new(2, col)).collect::<Vec<_>>()
    );
}

#[test]
fn test_three_in_a_row_does_not_win_on_five() {
    let snapshot = play_all(opening(5, 4), &[(2, 0), (0, 0), (2, 1), (0, 1), (2, 2)]);
    assert!(!snapshot.is_game_over());
    assert_eq!(snapshot.active(), Seat::Two);
}

#[test]
fn test_no_moves_after_game_over() {
    let snapshot = play_all(opening(3, 3), &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(
        transition(&snapshot, Coord::new(2, 2)),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_second_seat_first_plays_cross() {
    let opening = Snapshot::new(3, 3, Lineup::with_first(Seat::Two));
    assert_eq!(opening.active(), Seat::Two);
    assert_eq!(opening.active_token(), Token::Cross);
    let next = opening.play(Coord::new(0, 0)).unwrap();
    assert_eq!(next.board().token(Coord::new(0, 0)), Some(Token::Cross));
    assert_eq!(next.active(), Seat::One);
}

#[test]
fn test_naught_cannot_open() {
    let mut value = serde_json::to_value(opening(3, 3)).unwrap();
    value["active"] = serde_json::json!("two");
    let tampered: Snapshot = serde_json::from_value(value).unwrap();
    assert_eq!(tampered.active_token(), Token::Naught);

    let result = transition(&tampered, Coord::new(0, 0));
    assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
}

#[test]
fn test_contract_rejects_before_transition() {
    let snapshot = play_all(opening(3, 3), &[(2, 2)]);
    let result = MoveContract::pre(&snapshot, &Coord::new(2, 2));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = play_all(opening(3, 3), &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
