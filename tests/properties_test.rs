//! Property tests over reachable boards.

use proptest::prelude::*;
use tictactoe::board::{Board, Cell, Mark, TOTAL_CELLS};
use tictactoe::rules::{has_line, outcome, GameOutcome, WIN_LINES};
use tictactoe::search::best_move;

/// Play `moves` (taken modulo the empty cells left) until the game ends.
fn reachable_board(moves: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in moves {
        let empty = board.empty_cells();
        if empty.is_empty() || outcome(&board, board.move_count()).is_terminal() {
            break;
        }
        let mark = Mark::for_move_count(board.move_count());
        board
            .place(empty[choice % empty.len()], mark)
            .expect("empty cell on live board");
    }
    board
}

fn swap_marks(board: &Board) -> Board {
    let mut cells = *board.cells();
    for cell in cells.iter_mut() {
        *cell = match *cell {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        };
    }
    Board::from_cells(cells)
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..9, 0..=9).prop_map(|moves| reachable_board(&moves))
}

/// Every cell filled, X and O alternating in a shuffled order. Lines are
/// allowed, so both finished outcomes show up.
fn full_board() -> impl Strategy<Value = Board> {
    Just((0..TOTAL_CELLS).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|order| {
            let mut board = Board::new();
            for (turn, index) in order.into_iter().enumerate() {
                board.place_mark(index, Mark::for_move_count(turn));
            }
            board
        })
}

fn any_cells() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)])
        .prop_map(Board::from_cells)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn has_line_matches_win_lines(board in any_cells()) {
        for mark in [Mark::X, Mark::O] {
            let expected = WIN_LINES
                .iter()
                .any(|line| line.iter().all(|&i| board.get(i) == mark.to_cell()));
            prop_assert_eq!(has_line(&board, mark), expected);
        }
    }

    #[test]
    fn has_line_symmetric_under_relabeling(board in any_cells()) {
        let swapped = swap_marks(&board);
        prop_assert_eq!(has_line(&board, Mark::X), has_line(&swapped, Mark::O));
        prop_assert_eq!(has_line(&board, Mark::O), has_line(&swapped, Mark::X));
    }

    #[test]
    fn place_then_undo_restores(board in any_board(), index in 0usize..TOTAL_CELLS) {
        let mut work = board;
        let mark = Mark::for_move_count(board.move_count());
        if work.place(index, mark).is_ok() {
            work.undo(index);
        }
        prop_assert_eq!(work, board);
    }

    #[test]
    fn reachable_boards_keep_counts(board in any_board()) {
        prop_assert!(board.has_valid_counts());
    }

    #[test]
    fn full_board_outcome(board in full_board()) {
        prop_assert!(board.is_full());
        prop_assert_eq!(board.move_count(), TOTAL_CELLS);

        let result = outcome(&board, board.move_count());
        if has_line(&board, Mark::X) {
            prop_assert_eq!(result, GameOutcome::Won(Mark::X));
        } else if has_line(&board, Mark::O) {
            prop_assert_eq!(result, GameOutcome::Won(Mark::O));
        } else {
            prop_assert_eq!(result, GameOutcome::Tie);
        }
    }

    #[test]
    fn full_board_has_no_best_move(board in full_board()) {
        let mut work = board;
        let result = best_move(&mut work, Mark::O, 0);
        prop_assert_eq!(result.best_move, None);
        prop_assert_eq!(work, board);
    }

    #[test]
    fn best_move_targets_empty_cell(board in any_board()) {
        let mut work = board;
        let mark = Mark::for_move_count(board.move_count());
        let result = best_move(&mut work, mark, 0);

        prop_assert_eq!(work, board);
        match result.best_move {
            Some(index) => prop_assert!(board.is_empty(index)),
            None => prop_assert!(outcome(&board, board.move_count()).is_terminal()),
        }
    }
}

#[test]
fn drawn_line_of_play_reaches_full_tie() {
    // x o x / x o o / o x x
    let mut board = Board::new();
    for (turn, index) in [0, 4, 8, 1, 7, 6, 2, 5, 3].into_iter().enumerate() {
        board.place(index, Mark::for_move_count(turn)).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(outcome(&board, board.move_count()), GameOutcome::Tie);
}
