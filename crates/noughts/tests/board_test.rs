//! Tests for board win detection, draws, scoring and cloning.

use noughts::{Board, Mark, MoveError, Position, RandomStrategy, Strategy, Symbol};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for mark in [Mark::First, Mark::Second] {
            for &(row, col) in &line {
                let mut board = Board::new();
                for &(r, c) in &line {
                    board.apply_move(pos(r, c), mark).unwrap();
                }
                // Something of the opponent's off the line
                let spare = Position::ALL
                    .into_iter()
                    .find(|p| board.is_empty(*p))
                    .unwrap();
                board.apply_move(spare, mark.opponent()).unwrap();

                assert_eq!(
                    board.winner_at(pos(row, col)),
                    Some(mark),
                    "line {:?} through ({}, {})",
                    line,
                    row,
                    col
                );
                assert!(board.is_terminal());
                assert!(!board.is_draw());
            }
        }
    }
}

#[test]
fn test_no_false_positives() {
    let boards = [
        [["X", "O", "X"], ["O", "X", "O"], ["O", "X", "O"]],
        [["O", "O", "X"], [" ", "X", " "], [" ", " ", "O"]],
        [["X", " ", " "], [" ", "O", " "], [" ", " ", "X"]],
        [["O", "X", "O"], ["O", "X", "X"], ["X", "O", "O"]],
    ];

    for rows in boards {
        let mut board = Board::from_rows(rows).unwrap();
        let occupied: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| !board.is_empty(*p))
            .collect();
        for p in occupied {
            assert_eq!(board.winner_at(p), None, "{:?} at {}", rows, p);
        }
        assert!(!board.is_terminal());
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["O", "X", "O"]]).unwrap();
    assert!(board.empty_positions().is_empty());
    assert_eq!(board.winner_at(pos(2, 2)), None);
    assert!(board.is_draw());
    assert_eq!(board.score(pos(2, 2)), 0);
}

#[test]
fn test_top_row_win_scores_for_maximizer() {
    let mut board = Board::from_rows([["O", "O", "O"], [" ", " ", " "], [" ", " ", " "]]).unwrap();
    assert_eq!(board.winner_at(pos(0, 2)), Some(Mark::First));
    assert_eq!(board.score(pos(0, 2)), 10);
}

#[test]
fn test_main_diagonal_win_scores_for_minimizer() {
    let mut board = Board::from_rows([["X", " ", "O"], [" ", "X", "O"], [" ", " ", "X"]]).unwrap();
    assert_eq!(board.winner_at(pos(2, 2)), Some(Mark::Second));
    assert_eq!(board.score(pos(2, 2)), -10);
}

#[test]
fn test_empty_positions_row_major() {
    let board = Board::from_rows([["X", " ", "O"], [" ", "X", " "], ["O", " ", " "]]).unwrap();
    assert_eq!(
        board.empty_positions(),
        vec![pos(0, 1), pos(1, 0), pos(1, 2), pos(2, 1), pos(2, 2)]
    );
}

#[test]
fn test_clone_is_independent() {
    let mut original = Board::new();
    original.apply_move(Position::CENTER, Mark::First).unwrap();

    let mut copy = original.clone();
    copy.apply_move(pos(0, 0), Mark::Second).unwrap();
    copy.apply_move(pos(0, 1), Mark::First).unwrap();

    assert_eq!(original.symbol_at(pos(0, 0)), Symbol::Empty);
    assert_eq!(original.symbol_at(pos(0, 1)), Symbol::Empty);
    assert_eq!(original.empty_positions().len(), 8);
    assert_eq!(copy.empty_positions().len(), 6);
}

#[test]
fn test_clone_terminal_flag_is_independent() {
    let original = Board::from_rows([["O", "O", " "], ["X", "X", " "], [" ", " ", " "]]).unwrap();
    let mut copy = original.clone();
    copy.apply_move(pos(0, 2), Mark::First).unwrap();
    assert_eq!(copy.winner_at(pos(0, 2)), Some(Mark::First));

    assert!(copy.is_terminal());
    assert!(!original.is_terminal());
    assert!(original.is_empty(pos(0, 2)));
}

#[test]
fn test_occupied_square_rejected() {
    let mut board = Board::new();
    board.apply_move(pos(2, 1), Mark::Second).unwrap();
    let result = board.apply_move(pos(2, 1), Mark::First);
    assert_eq!(result, Err(MoveError::Occupied(pos(2, 1))));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_out_of_range_position_rejected() {
    assert_eq!(
        Position::new(1, 3),
        Err(MoveError::OutOfBounds { row: 1, col: 3 })
    );
}

#[test]
fn test_random_strategy_always_legal() {
    let mut filler = RandomStrategy::seeded(2024);
    let mut chooser = RandomStrategy::seeded(99);

    for _ in 0..200 {
        let mut board = Board::new();
        let mut mark = Mark::First;
        // Fill a random prefix of a game, stopping before the board is full.
        for _ in 0..8 {
            let choice = chooser.choose_move(&board, mark, None).unwrap();
            assert!(board.is_empty(choice));

            let next = filler.choose_move(&board, mark, None).unwrap();
            board.apply_move(next, mark).unwrap();
            if board.winner_at(next).is_some() {
                break;
            }
            mark = mark.opponent();
        }
    }
}
