//! Win condition checking
//!
//! A mark wins by filling one of the eight win lines: three rows, three
//! columns, two diagonals.

use crate::board::{Board, Mark, Move};

/// Win lines as index triples
pub const WIN_LINES: [[Move; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Check if `mark` fills any win line
#[inline]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    find_line(board, mark).is_some()
}

/// Find the first completed line for `mark`, in `WIN_LINES` order
pub fn find_line(board: &Board, mark: Mark) -> Option<[Move; 3]> {
    let cell = mark.to_cell();
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&index| board.get(index) == cell))
}

/// Check for a winner.
///
/// Returns `Some(Mark)` if either side has a line, `None` otherwise.
/// X is checked first; a reachable board never has both.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_line(board, mark))
}

/// The completed line and its owner, for highlighting
pub fn winning_line(board: &Board) -> Option<(Mark, [Move; 3])> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_line(board, mark).map(|line| (mark, line)))
}
